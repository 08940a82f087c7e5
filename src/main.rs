use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hirewire::app::AppContext;
use hirewire::config::Config;
use hirewire::refresh::RefreshLoop;
use hirewire::server;

#[derive(Parser)]
#[command(name = "hirewire")]
#[command(about = "Serves the latest \"who is hiring\" thread as a paginated job feed", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    let ctx = AppContext::new(config)?;

    // No thread to serve from means no point starting up.
    ctx.feed.init().await?;

    let refresh = RefreshLoop::new(
        ctx.feed.clone(),
        Duration::from_secs(ctx.config.feed.staleness_secs),
    );
    tokio::spawn(refresh.run());

    let app = server::router(ctx.feed.clone());
    let listener = tokio::net::TcpListener::bind(&ctx.config.server.bind_addr).await?;
    tracing::info!("Listening on {}", ctx.config.server.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
