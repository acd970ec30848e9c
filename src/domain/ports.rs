use crate::domain::model::{Contact, ContactFields};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Where contacts come from. The REST client is the production implementation.
#[async_trait]
pub trait ContactSource: Send + Sync {
    async fn list_contacts(&self) -> Result<Vec<Contact>>;
    async fn get_contact(&self, id: u64) -> Result<Contact>;
    /// Returns the stored contact when the server echoes it back.
    async fn create_contact(&self, fields: &ContactFields) -> Result<Option<Contact>>;
    async fn update_contact(&self, id: u64, fields: &ContactFields) -> Result<Option<Contact>>;
    async fn delete_contact(&self, id: u64) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn headers(&self) -> &HashMap<String, String>;
    fn literal_search(&self) -> bool;
}
