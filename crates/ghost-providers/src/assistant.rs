//! Adapts a chat vendor to the engine's collaborator traits.

use std::sync::Arc;

use async_trait::async_trait;
use ghost_core::responses::{BoardState, ProviderSuggestion, TaskSummary};
use ghost_engine::{CollaboratorError, ConversationalResponder, SuggestionProvider};

use crate::chat::{ChatBackend, ChatRequest};
use crate::prompts;

const SUGGEST_MAX_TOKENS: u32 = 500;
const SUGGEST_TEMPERATURE: f32 = 0.3;
const ASK_MAX_TOKENS: u32 = 150;
const ASK_TEMPERATURE: f32 = 0.7;

/// Picks tasks and answers questions through one chat vendor.
#[derive(Clone)]
pub struct GhostAssistant {
    backend: Arc<dyn ChatBackend>,
}

impl std::fmt::Debug for GhostAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhostAssistant")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl GhostAssistant {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

#[async_trait]
impl SuggestionProvider for GhostAssistant {
    fn name(&self) -> &'static str {
        self.backend.name()
    }

    async fn suggest(
        &self,
        candidates: &[TaskSummary],
    ) -> Result<ProviderSuggestion, CollaboratorError> {
        let req = ChatRequest {
            system: prompts::suggest_system(),
            user: prompts::suggest_user(candidates),
            max_tokens: SUGGEST_MAX_TOKENS,
            temperature: SUGGEST_TEMPERATURE,
        };
        let content = self.backend.complete(&req).await?;
        Ok(prompts::parse_suggestion(&content)?)
    }
}

#[async_trait]
impl ConversationalResponder for GhostAssistant {
    fn name(&self) -> &'static str {
        self.backend.name()
    }

    async fn respond(
        &self,
        text: &str,
        board: Option<&BoardState>,
    ) -> Result<String, CollaboratorError> {
        let req = ChatRequest {
            system: prompts::ask_system(),
            user: prompts::ask_user(text, board),
            max_tokens: ASK_MAX_TOKENS,
            temperature: ASK_TEMPERATURE,
        };
        Ok(self.backend.complete(&req).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::sync::Mutex;

    struct Canned {
        reply: Result<String, u16>,
        last: Mutex<Option<ChatRequest>>,
    }

    #[async_trait]
    impl ChatBackend for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn complete(&self, req: &ChatRequest) -> Result<String, ProviderError> {
            *self.last.lock().unwrap() = Some(req.clone());
            self.reply.clone().map_err(|status| ProviderError::Api {
                status,
                message: "nope".into(),
            })
        }
    }

    fn assistant(reply: Result<&str, u16>) -> (GhostAssistant, Arc<Canned>) {
        let backend = Arc::new(Canned {
            reply: reply.map(str::to_string),
            last: Mutex::new(None),
        });
        (GhostAssistant::new(backend.clone()), backend)
    }

    #[tokio::test]
    async fn suggest_parses_fenced_json() {
        let (assistant, backend) = assistant(Ok("```json\n{\"id\":\"t2\"}\n```"));
        let reply = assistant.suggest(&[]).await.unwrap();
        assert_eq!(reply.id.as_deref(), Some("t2"));

        let req = backend.last.lock().unwrap().clone().unwrap();
        assert_eq!(req.max_tokens, SUGGEST_MAX_TOKENS);
    }

    #[tokio::test]
    async fn suggest_with_prose_is_invalid_response() {
        let (assistant, _) = assistant(Ok("I'd go with the first one!"));
        let err = assistant.suggest(&[]).await.unwrap_err();
        assert!(matches!(err, CollaboratorError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn respond_passes_board_context() {
        let (assistant, backend) = assistant(Ok("One tiny step: open the doc."));
        let state = BoardState {
            backlog_count: 2,
            doing_count: 1,
            done_today: 0,
        };
        let reply = assistant.respond("I'm stuck", Some(&state)).await.unwrap();
        assert_eq!(reply, "One tiny step: open the doc.");

        let req = backend.last.lock().unwrap().clone().unwrap();
        assert!(req.user.contains("2 in backlog"));
        assert_eq!(req.temperature, ASK_TEMPERATURE);
    }

    #[tokio::test]
    async fn vendor_failure_maps_to_failed() {
        let (assistant, _) = assistant(Err(500));
        let err = assistant.respond("hi", None).await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Failed(_)));
    }
}
