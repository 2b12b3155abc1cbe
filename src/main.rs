use clap::Parser;
use std::sync::Arc;

mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Cli::parse();

    let mut cfg = config::Config::load_from(&args.config)?;
    args.apply(&mut cfg);

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Canonicalize the document root up front; a missing root is fatal
    let root = cfg.server.root.clone();
    let state = Arc::new(
        config::AppState::new(cfg)
            .map_err(|e| format!("Document root '{root}' is not usable: {e}"))?,
    );

    let listener = server::create_listener(addr)
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    logger::log_server_start(&addr);

    server::run(listener, state).await
}
