use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::TaskCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP backend for the browser board.
    Serve(ServeArgs),
    /// Manage board tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Coach on the focus task, or pick the best backlog task and focus it.
    Suggest,
    /// Ask the ghost anything.
    Ask(AskArgs),
    /// Show the three micro-steps for a task text.
    Plan(TextArgs),
    /// Classify text as a question or an action.
    Classify(TextArgs),
    /// Synthesize speech to an MP3 file.
    Speak(SpeakArgs),
    /// Throughput and cycle time.
    Metrics,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind host (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port (overrides `server.port` / `PORT`)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// What to ask; words are joined with spaces
    #[arg(trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl AskArgs {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct TextArgs {
    /// Task text
    #[arg(required = true, trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl TextArgs {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct SpeakArgs {
    /// Text to speak
    pub text: String,
    /// Where to write the audio
    #[arg(short, long, default_value = "ghost.mp3")]
    pub out: PathBuf,
}
