//! The chat completion seam both text vendors implement.

use async_trait::async_trait;

use crate::error::ProviderError;

/// One system + user exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A text-in, text-out chat vendor.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Vendor name for logs.
    fn name(&self) -> &'static str;

    /// Run one completion and return the reply text, trimmed.
    async fn complete(&self, req: &ChatRequest) -> Result<String, ProviderError>;
}
