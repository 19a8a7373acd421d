//! # Adrenaline Digest
//!
//! A scrape-and-notify pipeline for the Adrenaline games section. The
//! service fetches the listing page, extracts up to ten article records,
//! keeps the most recent successful extraction in memory, exposes it over
//! a small HTTP API, and emails it as an HTML digest.
//!
//! ## Usage
//!
//! ```sh
//! # Server variant: HTTP API plus a daily scheduled digest
//! adrenaline_digest serve --port 8000 --daily-at 12:00:00
//!
//! # One-shot variant: scrape once and email immediately
//! adrenaline_digest send
//! ```
//!
//! ## Architecture
//!
//! The pipeline is composed linearly:
//! 1. **Extraction**: Fetch the listing page with browser-like headers and
//!    parse the feed items ([`scrapers::adrenaline`])
//! 2. **Snapshot**: Replace the shared in-memory snapshot wholesale
//!    ([`state::NewsState`])
//! 3. **Notification**: Render the article table and deliver it over
//!    SMTP with STARTTLS ([`digest`], [`mailer`])
//!
//! The HTTP API ([`server`]) reads the snapshot and can trigger both steps
//! on demand; the scheduler ([`scheduler`]) runs them once per day.

pub mod cli;
pub mod config;
pub mod digest;
pub mod errors;
pub mod mailer;
pub mod models;
pub mod scheduler;
pub mod scrapers;
pub mod server;
pub mod state;
