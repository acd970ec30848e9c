use crate::core::{Contact, Tag};
use indexmap::IndexMap;
use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

pub const TAG_DELIMITER: char = ',';

static LABEL_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(\d+\)").expect("tag label pattern is valid"));

/// Splits a tag string on the delimiter. An empty string has no tags; anything
/// else is split literally, without trimming.
pub fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
    let source = if tags.is_empty() { None } else { Some(tags) };
    source
        .into_iter()
        .flat_map(|tags| tags.split(TAG_DELIMITER))
}

/// Counts tag occurrences across a collection of tag strings.
///
/// Tags are returned in the order their name is first seen. Every post-split
/// occurrence counts, so a name repeated inside one string is counted twice.
pub fn aggregate_tags<'a, I>(tag_strings: I) -> Vec<Tag>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();

    for tags in tag_strings.into_iter().flatten() {
        for name in split_tags(tags) {
            *counts.entry(name).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(name, frequency)| Tag {
            name: name.to_string(),
            frequency,
        })
        .collect()
}

pub fn aggregate_contact_tags(contacts: &[Contact]) -> Vec<Tag> {
    aggregate_tags(contacts.iter().map(|contact| contact.tags.as_deref()))
}

/// Drops repeated names from a tag string, keeping first occurrences.
pub fn dedupe_tag_string(tags: &str) -> String {
    let unique: IndexSet<&str> = tags.split(TAG_DELIMITER).collect();
    let mut joined = String::with_capacity(tags.len());
    for (i, name) in unique.iter().enumerate() {
        if i > 0 {
            joined.push(TAG_DELIMITER);
        }
        joined.push_str(name);
    }
    joined
}

/// Recovers the tag name from a tag-list label such as `work (3)`.
pub fn tag_name_from_label(label: &str) -> String {
    LABEL_COUNT.replacen(label, 1, "").into_owned()
}
