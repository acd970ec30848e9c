pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use crate::core::contact_book::{ContactBook, Outcome};
pub use crate::core::filter::{filter_by_tag, filter_by_text, SearchMode};
pub use crate::core::tags::{aggregate_contact_tags, aggregate_tags};
pub use adapters::RestContactSource;
pub use config::Settings;
pub use domain::model::{Contact, ContactFields, Tag};
pub use utils::error::{ContactBookError, Result};
pub use view::{Panel, TerminalView, View};
