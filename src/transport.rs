use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// Client of the external form generation service.
///
/// Implementations own the HTTP call and its authentication; they return the
/// deserialized response body untouched. Cancellation is done by dropping the
/// returned future.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send a generation prompt with its caller-supplied context.
    async fn send(&self, prompt: &str, context: &Value) -> Result<Value, TransportError>;
}
