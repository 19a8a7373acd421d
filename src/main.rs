use std::error::Error;
use std::sync::Arc;

use chrono::NaiveTime;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use adrenaline_digest::cli::{Cli, Command};
use adrenaline_digest::config;
use adrenaline_digest::mailer::Mailer;
use adrenaline_digest::scheduler;
use adrenaline_digest::scrapers::{self, adrenaline};
use adrenaline_digest::server::{self, AppState};
use adrenaline_digest::state::NewsState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    dotenvy::dotenv().ok();

    let args = Cli::parse();

    match args.command {
        Command::Serve {
            host,
            port,
            daily_at,
            news_url,
        } => run_server(host, port, daily_at, news_url).await,
        Command::Send { news_url } => run_once(news_url).await,
    }
}

/// Server variant: HTTP API plus the daily schedule. Mail settings are
/// read lazily on each send attempt, so the server comes up without them.
async fn run_server(
    host: String,
    port: u16,
    daily_at: NaiveTime,
    news_url: String,
) -> Result<(), Box<dyn Error>> {
    let news_url = config::validate_news_url(&news_url)?;
    info!(%news_url, "Starting digest server");

    let state = Arc::new(AppState {
        client: scrapers::http_client()?,
        news_url,
        news: NewsState::new(),
    });

    scheduler::spawn_daily(Arc::clone(&state), daily_at);
    server::serve(state, &host, port).await?;

    Ok(())
}

/// One-shot variant: refuse to run without complete mail settings, scrape
/// once, and email unless the page yielded nothing.
async fn run_once(news_url: String) -> Result<(), Box<dyn Error>> {
    let news_url = config::validate_news_url(&news_url)?;
    let mailer = Mailer::from_env()?;

    let client = scrapers::http_client()?;
    let articles = adrenaline::fetch_articles(&client, &news_url).await?;

    if articles.is_empty() {
        info!("No articles collected; nothing to send");
        return Ok(());
    }

    info!(count = articles.len(), "Sending digest");
    mailer.send_digest(&articles).await?;

    Ok(())
}
