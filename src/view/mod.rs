pub mod templates;
pub mod terminal;

use crate::domain::model::{Contact, Tag};

pub use terminal::TerminalView;

/// Which panel of the contact book is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Default,
    SearchResults,
    TagResults,
    EditContact,
}

/// Rendering collaborator for the contact book.
pub trait View: Send + Sync {
    fn show_contacts(&self, contacts: &[Contact]);
    fn show_tags(&self, tags: &[Tag]);
    fn show_search_results(&self, term: &str, contacts: &[Contact]);
    fn show_tag_results(&self, tag: &str, contacts: &[Contact]);
    fn show_contact_form(&self, contact: &Contact);
    fn panel(&self) -> Panel;
}
