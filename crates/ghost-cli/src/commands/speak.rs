use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SpeakArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
pub struct SpeechFile {
    pub path: String,
    pub bytes: usize,
}

impl TextView for SpeechFile {
    fn to_text(&self) -> String {
        format!("Wrote {} bytes to {}", self.bytes, self.path)
    }
}

/// Handle `kghost speak`.
pub async fn handle(args: &SpeakArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let speech = ctx
        .speech
        .as_ref()
        .context("TTS not configured. Set ELEVEN_API_KEY and ELEVEN_VOICE_ID")?;

    let audio = speech.speak(&args.text).await.context("TTS failed")?;
    std::fs::write(&args.out, &audio)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    output(
        &SpeechFile {
            path: args.out.display().to_string(),
            bytes: audio.len(),
        },
        flags.format,
    )
}
