use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags),
        Commands::Suggest => commands::suggest::handle(ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args.text(), ctx, flags).await,
        Commands::Plan(args) => commands::plan::handle(&args.text(), flags),
        Commands::Classify(args) => commands::classify::handle(&args.text(), flags),
        Commands::Speak(args) => commands::speak::handle(&args, ctx, flags).await,
        Commands::Metrics => commands::metrics::handle(ctx, flags),
    }
}
