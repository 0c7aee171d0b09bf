mod assets;
mod board;
mod config;
mod data;
mod errors;
mod filters;
mod models;
mod session;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::{FsLogoResolver, LogoTable};
use crate::board::Board;
use crate::config::Config;
use crate::data::load_jobs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the board.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting job board v{}", env!("CARGO_PKG_VERSION"));

    let jobs = load_jobs(&config.data_path).await?;

    let resolver = FsLogoResolver::new(&config.assets_dir);
    let logos = LogoTable::build(&jobs, &resolver, &config.fallback_logo).await;
    info!(
        "Logos resolved against {} (tags interactive: {})",
        config.assets_dir.display(),
        config.tags_interactive
    );

    let mut board = Board::new(jobs, logos, config.tags_interactive);
    session::run(
        &mut board,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
