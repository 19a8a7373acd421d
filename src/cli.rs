//! Command-line interface definitions.
//!
//! Two subcommands cover the two ways the pipeline runs: `serve` starts
//! the HTTP API with the daily schedule, `send` scrapes once and emails
//! immediately. Options with an `env` attribute can be provided through
//! the environment as well as on the command line.

use chrono::NaiveTime;
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_NEWS_URL;

/// Command-line arguments for the digest service.
///
/// # Examples
///
/// ```sh
/// # HTTP API on port 8000, digest mailed daily at noon
/// adrenaline_digest serve
///
/// # Custom schedule and port
/// adrenaline_digest serve --port 9000 --daily-at 07:30:00
///
/// # Scrape once and email immediately
/// adrenaline_digest send
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API with the daily digest schedule
    Serve {
        /// Address to bind on
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind on
        #[arg(short, long, env = "PORT", default_value_t = 8000)]
        port: u16,

        /// Local wall-clock time of the daily run (HH:MM:SS)
        #[arg(long, default_value = "12:00:00", value_parser = parse_daily_at)]
        daily_at: NaiveTime,

        /// Listing page to scrape
        #[arg(long, env = "NEWS_URL", default_value = DEFAULT_NEWS_URL)]
        news_url: String,
    },

    /// Scrape once and email the digest immediately
    Send {
        /// Listing page to scrape
        #[arg(long, env = "NEWS_URL", default_value = DEFAULT_NEWS_URL)]
        news_url: String,
    },
}

fn parse_daily_at(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .map_err(|e| format!("expected HH:MM:SS: {e}"))
}
