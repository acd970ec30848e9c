use serde::{Deserialize, Serialize};

/// A contact as returned by the contacts API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    /// Delimiter-joined tag names, `None` when the API sends `null` or omits it.
    #[serde(default)]
    pub tags: Option<String>,
}

impl Contact {
    pub fn tag_string(&self) -> &str {
        self.tags.as_deref().unwrap_or("")
    }
}

/// The writable fields of a contact, sent as the JSON body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: String,
}

impl From<&Contact> for ContactFields {
    fn from(contact: &Contact) -> Self {
        Self {
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            phone_number: contact.phone_number.clone(),
            tags: contact.tag_string().to_string(),
        }
    }
}

/// A tag name and the number of times it occurs across a contact collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub frequency: usize,
}

impl Tag {
    /// Label shown in the tag list, e.g. `work (3)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.frequency)
    }
}
