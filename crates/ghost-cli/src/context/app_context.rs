use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use ghost_config::GhostConfig;
use ghost_engine::{EngineConfig, SuggestionEngine};
use ghost_providers::ElevenLabsClient;
use ghost_store::BoardStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GhostConfig,
    pub store: BoardStore,
    pub engine: Arc<SuggestionEngine>,
    pub speech: Option<Arc<ElevenLabsClient>>,
}

impl AppContext {
    /// Wire the store, engine, and speech client from config.
    ///
    /// `board` overrides the configured `<data_dir>/<slot>.json` location.
    pub fn init(config: GhostConfig, board: Option<PathBuf>) -> anyhow::Result<Self> {
        let store = BoardStore::new(board.unwrap_or_else(|| config.general.board_path()));
        let engine = Arc::new(build_engine(&config)?);
        let speech = ghost_providers::speech_from_config(&config)
            .context("failed to build ElevenLabs client")?
            .map(Arc::new);

        tracing::debug!(
            board = %store.path().display(),
            ?engine,
            speech = speech.is_some(),
            "application context ready"
        );

        Ok(Self {
            config,
            store,
            engine,
            speech,
        })
    }
}

/// Build the suggestion engine with whichever chat vendor is configured.
pub fn build_engine(config: &GhostConfig) -> anyhow::Result<SuggestionEngine> {
    let flags = config.engine_flags();
    let mut engine = SuggestionEngine::new(EngineConfig {
        has_conversational_provider: flags.has_conversational_provider,
        has_suggestion_provider: flags.has_suggestion_provider,
        provider_timeout: config.general.provider_timeout(),
    });

    if let Some(assistant) =
        ghost_providers::assistant_from_config(config).context("failed to build chat client")?
    {
        let assistant = Arc::new(assistant);
        engine = engine
            .with_suggestion_provider(assistant.clone())
            .with_responder(assistant);
    }

    Ok(engine)
}
