use crate::domain::model::{Contact, Tag};
use crate::view::{templates, Panel, View};
use std::io::Write;
use std::sync::Mutex;

/// Renders the contact book as plain text into any writer.
pub struct TerminalView<W: Write + Send> {
    sink: Mutex<W>,
    panel: Mutex<Panel>,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
            panel: Mutex::new(Panel::Default),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_block(&self, block: &str) {
        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(sink, "{}\n", block).and_then(|_| sink.flush()) {
            tracing::warn!("Failed to write view output: {}", e);
        }
    }

    fn display(&self, panel: Panel) {
        if let Ok(mut current) = self.panel.lock() {
            *current = panel;
        }
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn show_contacts(&self, contacts: &[Contact]) {
        self.write_block(&templates::default_contacts(contacts));
        self.display(Panel::Default);
    }

    fn show_tags(&self, tags: &[Tag]) {
        self.write_block(&templates::tag_list(tags));
    }

    fn show_search_results(&self, term: &str, contacts: &[Contact]) {
        self.write_block(&templates::search_results(term, contacts));
        self.display(Panel::SearchResults);
    }

    fn show_tag_results(&self, tag: &str, contacts: &[Contact]) {
        self.write_block(&templates::tag_results(tag, contacts));
        self.display(Panel::TagResults);
    }

    fn show_contact_form(&self, contact: &Contact) {
        self.write_block(&templates::edit_form(contact));
        self.display(Panel::EditContact);
    }

    fn panel(&self) -> Panel {
        self.panel.lock().map(|panel| *panel).unwrap_or_default()
    }
}
