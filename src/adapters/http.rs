use crate::core::{ConfigProvider, Contact, ContactFields, ContactSource};
use crate::utils::error::{ContactBookError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};

const CONTACTS_PATH: &str = "/api/contacts";

/// Contact source backed by the `/api/contacts` REST endpoints.
#[derive(Debug, Clone)]
pub struct RestContactSource {
    base_url: String,
    client: Client,
}

impl RestContactSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in config.headers() {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                ContactBookError::InvalidConfigValueError {
                    field: "api.headers".to_string(),
                    value: key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ContactBookError::InvalidConfigValueError {
                    field: format!("api.headers.{}", key),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, CONTACTS_PATH)
    }

    fn contact_url(&self, id: u64) -> String {
        format!("{}{}/{}", self.base_url, CONTACTS_PATH, id)
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<&ContactFields>,
    ) -> Result<Response> {
        tracing::debug!("📡 {} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(fields) = body {
            request = request.json(fields);
        }

        let response = request.send().await?;
        tracing::debug!("📡 {} {} -> {}", method, url, response.status());

        if !response.status().is_success() {
            return Err(ContactBookError::HttpStatusError {
                method: method.to_string(),
                url,
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    /// Decodes the echoed contact of a successful write. The write already
    /// happened, so an empty or unreadable body only means there is no echo.
    async fn written_contact(response: Response) -> Result<Option<Contact>> {
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice(&body) {
            Ok(contact) => Ok(Some(contact)),
            Err(e) => {
                tracing::debug!("Write response is not a contact: {}", e);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ContactSource for RestContactSource {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let response = self.send(Method::GET, self.collection_url(), None).await?;
        let contacts: Vec<Contact> = serde_json::from_slice(&response.bytes().await?)?;
        tracing::debug!("Fetched {} contacts", contacts.len());
        Ok(contacts)
    }

    async fn get_contact(&self, id: u64) -> Result<Contact> {
        let response = self.send(Method::GET, self.contact_url(id), None).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    async fn create_contact(&self, fields: &ContactFields) -> Result<Option<Contact>> {
        let response = self
            .send(Method::POST, self.collection_url(), Some(fields))
            .await?;
        let created = Self::written_contact(response).await?;
        match &created {
            Some(contact) => {
                tracing::info!("✅ Created contact #{} {}", contact.id, contact.full_name)
            }
            None => tracing::info!("✅ Created contact {}", fields.full_name),
        }
        Ok(created)
    }

    async fn update_contact(&self, id: u64, fields: &ContactFields) -> Result<Option<Contact>> {
        let response = self
            .send(Method::PUT, self.contact_url(id), Some(fields))
            .await?;
        let updated = Self::written_contact(response).await?;
        tracing::info!("✅ Updated contact #{}", id);
        Ok(updated)
    }

    async fn delete_contact(&self, id: u64) -> Result<()> {
        self.send(Method::DELETE, self.contact_url(id), None).await?;
        tracing::info!("✅ Deleted contact #{}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let source = RestContactSource::new("http://localhost:3000/");
        assert_eq!(source.base_url(), "http://localhost:3000");
        assert_eq!(source.collection_url(), "http://localhost:3000/api/contacts");
        assert_eq!(source.contact_url(12), "http://localhost:3000/api/contacts/12");
    }
}
