use crate::core::tags::split_tags;
use crate::core::Contact;
use regex::{Regex, RegexBuilder};

/// How a search term is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// The term is a regular expression; metacharacters keep their meaning.
    #[default]
    Pattern,
    /// The term is matched as plain text.
    Literal,
}

pub fn compile_search(term: &str, mode: SearchMode) -> Result<Regex, regex::Error> {
    let source = match mode {
        SearchMode::Pattern => term.to_string(),
        SearchMode::Literal => regex::escape(term),
    };
    RegexBuilder::new(&source).case_insensitive(true).build()
}

/// Contacts whose full name matches `term`, case-insensitively.
///
/// A term that does not compile matches nothing.
pub fn filter_by_text(contacts: &[Contact], term: &str, mode: SearchMode) -> Vec<Contact> {
    let pattern = match compile_search(term, mode) {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!("Ignoring search term {:?}: {}", term, e);
            return Vec::new();
        }
    };

    contacts
        .iter()
        .filter(|contact| pattern.is_match(&contact.full_name))
        .cloned()
        .collect()
}

/// Contacts carrying exactly `tag` once their tag string is split.
pub fn filter_by_tag(contacts: &[Contact], tag: &str) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|contact| split_tags(contact.tag_string()).any(|name| name == tag))
        .cloned()
        .collect()
}
