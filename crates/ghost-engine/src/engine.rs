//! The suggestion state machine.
//!
//! ```text
//! Start -> Empty            -> ALL_CAUGHT_UP
//!       -> Selected(task)   -> question? -> Answer(reply | fallback)
//!                                        -> Plan(compose(text, plan(text)))
//! ```
//!
//! The provider may only choose *which* task; wording always comes from the
//! planner or the conversational responder. Every collaborator call is bounded
//! by [`EngineConfig::provider_timeout`] and degrades to a fixed phrase.

use std::sync::Arc;
use std::time::Duration;

use ghost_core::entities::Task;
use ghost_core::responses::{BoardState, PickSource, Route, SuggestionResult, TaskSummary};

use crate::collaborator::{
    ConversationalResponder, DEFAULT_PROVIDER_TIMEOUT, SuggestionProvider, with_fallback,
};
use crate::compose::{
    ALL_CAUGHT_UP, ASK_FALLBACK, EMPTY_ASK, PICKED_QUESTION_FALLBACK, QUESTION_FALLBACK,
    compose_plan,
};
use crate::responder::HeuristicResponder;
use crate::{intent, planner, selector};

/// Which collaborators are available, and how long to wait for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub has_conversational_provider: bool,
    pub has_suggestion_provider: bool,
    pub provider_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            has_conversational_provider: false,
            has_suggestion_provider: false,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

/// Stateless between requests; safe to share behind an `Arc`.
pub struct SuggestionEngine {
    config: EngineConfig,
    suggester: Option<Arc<dyn SuggestionProvider>>,
    responder: Option<Arc<dyn ConversationalResponder>>,
}

impl std::fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionEngine")
            .field("config", &self.config)
            .field("suggester", &self.suggester.as_ref().map(|s| s.name()))
            .field("responder", &self.responder.as_ref().map(|r| r.name()))
            .finish()
    }
}

impl SuggestionEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            suggester: None,
            responder: None,
        }
    }

    #[must_use]
    pub fn with_suggestion_provider(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.suggester = Some(provider);
        self
    }

    #[must_use]
    pub fn with_responder(mut self, responder: Arc<dyn ConversationalResponder>) -> Self {
        self.responder = Some(responder);
        self
    }

    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Choose a task from the board and coach on it.
    pub async fn suggest(&self, tasks: &[Task]) -> SuggestionResult {
        let candidates = selector::candidates(tasks);
        if candidates.is_empty() {
            tracing::debug!("no workable tasks");
            return caught_up();
        }

        if let Some(task) = self.consult_provider(&candidates).await {
            return self.coach_task(task, PickSource::Provider).await;
        }

        let Some(task) = selector::select_from(&candidates) else {
            return caught_up();
        };
        self.coach_task(task, PickSource::Heuristic).await
    }

    /// Coach on a task the caller already focused; no selection happens.
    pub async fn coach(&self, task: &Task) -> SuggestionResult {
        self.coach_task(task, PickSource::Focus).await
    }

    /// Answer a free-form utterance.
    pub async fn ask(&self, text: &str, board: Option<&BoardState>) -> String {
        if text.trim().is_empty() {
            return EMPTY_ASK.to_string();
        }
        self.respond_or(text, board, ASK_FALLBACK).await
    }

    async fn coach_task(&self, task: &Task, source: PickSource) -> SuggestionResult {
        let (route, message) = if intent::is_question(&task.text) {
            let fallback = match source {
                PickSource::Focus => QUESTION_FALLBACK,
                PickSource::Heuristic | PickSource::Provider => PICKED_QUESTION_FALLBACK,
            };
            let reply = self.respond_or(&task.text, None, fallback).await;
            (Route::Answer, reply)
        } else {
            let steps = planner::plan(&task.text);
            (Route::Plan, compose_plan(&task.text, &steps))
        };

        tracing::debug!(task_id = %task.id, ?route, ?source, "composed suggestion");
        SuggestionResult {
            task_id: Some(task.id.clone()),
            message,
            route,
            source: Some(source),
        }
    }

    /// Ask the suggestion provider to pick. Only ids from the candidate set
    /// are honoured.
    async fn consult_provider<'a>(&self, candidates: &[&'a Task]) -> Option<&'a Task> {
        if !self.config.has_suggestion_provider {
            return None;
        }
        let provider = self.suggester.as_ref()?;
        let summaries: Vec<TaskSummary> = candidates.iter().map(|t| TaskSummary::from(*t)).collect();

        let reply = with_fallback(
            provider.name(),
            self.config.provider_timeout,
            provider.suggest(&summaries),
        )
        .await?;

        if let Some(say) = reply.say.as_deref() {
            tracing::debug!(provider = provider.name(), say, "ignoring provider wording");
        }

        let id = reply.id?;
        let picked = candidates.iter().copied().find(|t| t.id == id);
        if picked.is_none() {
            tracing::warn!(provider = provider.name(), %id, "provider picked an unknown task id");
        }
        picked
    }

    /// Route text to the conversational provider, or to
    /// [`HeuristicResponder`] when none is configured.
    async fn respond_or(
        &self,
        text: &str,
        board: Option<&BoardState>,
        fallback: &str,
    ) -> String {
        let responder: &dyn ConversationalResponder =
            match (&self.responder, self.config.has_conversational_provider) {
                (Some(responder), true) => responder.as_ref(),
                _ => &HeuristicResponder,
            };

        with_fallback(
            responder.name(),
            self.config.provider_timeout,
            responder.respond(text, board),
        )
        .await
        .filter(|reply| !reply.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
    }
}

fn caught_up() -> SuggestionResult {
    SuggestionResult {
        task_id: None,
        message: ALL_CAUGHT_UP.to_string(),
        route: Route::CaughtUp,
        source: None,
    }
}
