pub mod contact_book;
pub mod filter;
pub mod tags;

pub use crate::domain::model::{Contact, ContactFields, Tag};
pub use crate::domain::ports::{ConfigProvider, ContactSource};
pub use crate::utils::error::Result;
