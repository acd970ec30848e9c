//! String templates for the terminal view.

use crate::core::tags::split_tags;
use crate::domain::model::{Contact, Tag};

pub fn contact_card(contact: &Contact) -> String {
    let mut lines = vec![format!("#{} {}", contact.id, contact.full_name)];
    if !contact.email.is_empty() {
        lines.push(format!("    email: {}", contact.email));
    }
    if !contact.phone_number.is_empty() {
        lines.push(format!("    phone: {}", contact.phone_number));
    }
    let tags: Vec<&str> = split_tags(contact.tag_string()).collect();
    if !tags.is_empty() {
        lines.push(format!("    tags:  {}", tags.join(" | ")));
    }
    lines.join("\n")
}

fn contact_list(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(contact_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn default_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "There are no contacts.".to_string();
    }
    format!("Contacts ({})\n\n{}", contacts.len(), contact_list(contacts))
}

pub fn search_results(term: &str, contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return format!("There are no contacts matching {}.", term);
    }
    format!(
        "Contacts matching {} ({})\n\n{}",
        term,
        contacts.len(),
        contact_list(contacts)
    )
}

pub fn tag_results(tag: &str, contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return format!("There are no contacts tagged {}.", tag);
    }
    format!(
        "Contacts tagged {} ({})\n\n{}",
        tag,
        contacts.len(),
        contact_list(contacts)
    )
}

pub fn tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "Tags: none".to_string();
    }
    let labels: Vec<String> = tags.iter().map(Tag::label).collect();
    format!("Tags: {}", labels.join(", "))
}

pub fn edit_form(contact: &Contact) -> String {
    [
        format!("Edit contact #{}", contact.id),
        format!("  full_name    = {}", contact.full_name),
        format!("  email        = {}", contact.email),
        format!("  phone_number = {}", contact.phone_number),
        format!("  tags         = {}", contact.tag_string()),
    ]
    .join("\n")
}
