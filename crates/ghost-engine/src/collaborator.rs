//! Seams for the external collaborators and the timeout/fallback wrapper.
//!
//! Both traits are object safe so the engine can hold `Arc<dyn ...>` and the
//! backend can swap vendors (or fakes in tests) without touching the engine.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use ghost_core::responses::{BoardState, ProviderSuggestion, TaskSummary};

/// Default bound on a single collaborator call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Failed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Picks one task from the candidate set.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn suggest(
        &self,
        candidates: &[TaskSummary],
    ) -> Result<ProviderSuggestion, CollaboratorError>;
}

/// Produces a short conversational reply.
#[async_trait]
pub trait ConversationalResponder: Send + Sync {
    fn name(&self) -> &'static str;

    async fn respond(
        &self,
        text: &str,
        board: Option<&BoardState>,
    ) -> Result<String, CollaboratorError>;
}

/// Await `call` for at most `timeout`.
///
/// Returns `None` on error or timeout and logs a warning; callers substitute
/// their fallback. Never panics and never propagates the error.
pub async fn with_fallback<T, F>(collaborator: &str, timeout: Duration, call: F) -> Option<T>
where
    F: Future<Output = Result<T, CollaboratorError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            tracing::warn!(collaborator, %error, "collaborator call failed, using fallback");
            None
        }
        Err(_) => {
            tracing::warn!(
                collaborator,
                error = %CollaboratorError::Timeout(timeout),
                "collaborator call timed out, using fallback"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_success() {
        let out = with_fallback("t", Duration::from_secs(1), async { Ok::<_, CollaboratorError>(7) })
            .await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn swallows_errors() {
        let out: Option<u8> = with_fallback("t", Duration::from_secs(1), async {
            Err(CollaboratorError::Failed("boom".into()))
        })
        .await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn times_out() {
        let out = with_fallback("t", Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, CollaboratorError>(1)
        })
        .await;
        assert!(out.is_none());
    }
}
