use crate::error::Result;

/// Trait for choosers: receive the newline-terminated list, return the raw selection
#[async_trait::async_trait]
pub trait Chooser: Send + Sync {
    /// Run the chooser once and return everything it wrote to stdout
    async fn choose(&self, input: &str) -> Result<String>;
}
