use async_trait::async_trait;
use crate::application::errors::ChatError;

/// Backend trait - abstraction for whatever produces bot replies
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and return the reply text
    async fn ask(&self, message: &str) -> Result<String, ChatError>;
}
