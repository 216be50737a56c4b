use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::server;

/// Handle `kghost serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let mut bind = ctx.config.server.clone();
    if let Some(host) = &args.host {
        bind.host.clone_from(host);
    }
    if let Some(port) = args.port {
        bind.port = port;
    }

    let state = server::AppState::new(ctx.engine.clone(), ctx.speech.clone());
    server::serve(state, &bind.addr()).await
}
