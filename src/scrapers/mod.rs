//! Scrapers for the news listings the digest covers.
//!
//! Each source module exports:
//! - `fetch_articles(client, url)`: Fetch the listing page and return the
//!   extracted [`Article`](crate::models::Article) records
//! - `parse_articles(html)`: The pure extraction step, separated so it can
//!   be tested without a network
//!
//! Scrapers share the HTTP client built here. The upstream pages serve
//! different markup (or refuse) non-browser clients, so the client always
//! announces a desktop browser User-Agent with matching Accept headers,
//! and every request carries an explicit timeout.

pub mod adrenaline;

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

use crate::errors::FetchError;

/// User-Agent announced on every page fetch.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Accept header matching what a desktop browser sends for page loads.
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Accept-Language matching the source site's audience.
pub const BROWSER_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client used for all page fetches.
pub fn http_client() -> Result<reqwest::Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}
