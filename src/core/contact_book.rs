use crate::core::filter::{filter_by_tag, filter_by_text, SearchMode};
use crate::core::tags::{aggregate_contact_tags, dedupe_tag_string, tag_name_from_label};
use crate::core::{Contact, ContactFields, ContactSource};
use crate::utils::error::Result;
use crate::view::View;
use std::sync::atomic::{AtomicU64, Ordering};

/// What a contact book action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Data arrived and was handed to the view.
    Rendered,
    /// The request succeeded but there was nothing to show.
    Empty,
    /// The request failed; the failure has been logged and nothing was rendered.
    Failed,
    /// A newer action started before this one's response arrived.
    Stale,
}

/// Monotonic counter handing out one ticket per rendering request.
///
/// Only the holder of the newest ticket may render, so a slow response can
/// never overwrite the result of a later action.
#[derive(Debug, Default)]
pub struct RequestGenerations {
    latest: AtomicU64,
}

impl RequestGenerations {
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

pub struct ContactBook<S: ContactSource, V: View> {
    source: S,
    view: V,
    search_mode: SearchMode,
    generations: RequestGenerations,
}

impl<S: ContactSource, V: View> ContactBook<S, V> {
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view,
            search_mode: SearchMode::default(),
            generations: RequestGenerations::default(),
        }
    }

    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches every contact, logging and swallowing failures.
    async fn fetch_all(&self, ticket: u64) -> std::result::Result<Vec<Contact>, Outcome> {
        let contacts = match self.source.list_contacts().await {
            Ok(contacts) => contacts,
            Err(e) => {
                tracing::warn!("⚠️ Get request for all contacts failed: {}", e);
                return Err(Outcome::Failed);
            }
        };

        if !self.generations.is_current(ticket) {
            tracing::debug!("Dropping stale response for request #{}", ticket);
            return Err(Outcome::Stale);
        }
        Ok(contacts)
    }

    /// Shows the full contact list and the tag list.
    pub async fn paint_default(&self) -> Outcome {
        let ticket = self.generations.begin();
        let contacts = match self.fetch_all(ticket).await {
            Ok(contacts) => contacts,
            Err(outcome) => return outcome,
        };

        self.view.show_contacts(&contacts);

        let tags = aggregate_contact_tags(&contacts);
        tracing::debug!(
            "Aggregated {} distinct tags from {} contacts",
            tags.len(),
            contacts.len()
        );
        self.view.show_tags(&tags);

        if contacts.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Rendered
        }
    }

    /// Shows only the tag list.
    pub async fn show_tags(&self) -> Outcome {
        let ticket = self.generations.begin();
        let contacts = match self.fetch_all(ticket).await {
            Ok(contacts) => contacts,
            Err(outcome) => return outcome,
        };

        let tags = aggregate_contact_tags(&contacts);
        self.view.show_tags(&tags);

        if tags.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Rendered
        }
    }

    /// Narrows the contact list by name. An empty term goes back to the default view.
    pub async fn search(&self, term: &str) -> Outcome {
        if term.is_empty() {
            return self.paint_default().await;
        }

        let ticket = self.generations.begin();
        let contacts = match self.fetch_all(ticket).await {
            Ok(contacts) => contacts,
            Err(outcome) => return outcome,
        };

        let matches = filter_by_text(&contacts, term, self.search_mode);
        tracing::debug!("🔍 {:?} matched {}/{} contacts", term, matches.len(), contacts.len());
        self.view.show_search_results(term, &matches);

        if matches.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Rendered
        }
    }

    /// Shows the contacts carrying the tag named by a tag-list label such as `work (2)`.
    pub async fn select_tag(&self, label: &str) -> Outcome {
        let tag = tag_name_from_label(label);

        let ticket = self.generations.begin();
        let contacts = match self.fetch_all(ticket).await {
            Ok(contacts) => contacts,
            Err(outcome) => return outcome,
        };

        let matches = filter_by_tag(&contacts, &tag);
        tracing::debug!("🏷️ {:?} matched {}/{} contacts", tag, matches.len(), contacts.len());
        self.view.show_tag_results(&tag, &matches);

        if matches.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Rendered
        }
    }

    /// Loads one contact into the edit form.
    pub async fn open_contact(&self, id: u64) -> Outcome {
        let ticket = self.generations.begin();
        let contact = match self.source.get_contact(id).await {
            Ok(contact) => contact,
            Err(e) => {
                tracing::warn!("⚠️ Get request for contact {} failed: {}", id, e);
                return Outcome::Failed;
            }
        };

        if !self.generations.is_current(ticket) {
            return Outcome::Stale;
        }

        self.view.show_contact_form(&contact);
        Outcome::Rendered
    }

    /// Creates a contact with duplicate tag names removed, then repaints.
    pub async fn create_contact(&self, fields: ContactFields) -> Result<Option<Contact>> {
        let fields = ContactFields {
            tags: dedupe_tag_string(&fields.tags),
            ..fields
        };

        let created = self.source.create_contact(&fields).await.inspect_err(|e| {
            tracing::warn!("⚠️ Post request to add contact failed: {}", e);
        });
        self.paint_default().await;
        created
    }

    /// Replaces a contact's fields, then repaints.
    pub async fn update_contact(
        &self,
        id: u64,
        fields: ContactFields,
    ) -> Result<Option<Contact>> {
        let updated = self.source.update_contact(id, &fields).await.inspect_err(|e| {
            tracing::warn!("⚠️ Put request to edit contact {} failed: {}", id, e);
        });
        self.paint_default().await;
        updated
    }

    /// Deletes a contact, then repaints. Asking for confirmation is up to the caller.
    pub async fn delete_contact(&self, id: u64) -> Result<()> {
        let deleted = self.source.delete_contact(id).await.inspect_err(|e| {
            tracing::warn!("⚠️ Delete request for contact {} failed: {}", id, e);
        });
        self.paint_default().await;
        deleted
    }
}
