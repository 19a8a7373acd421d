//! Adrenaline games listing scraper.
//!
//! This module scrapes the games section of
//! [Adrenaline](https://www.adrenaline.com.br/games/), a Brazilian tech and
//! gaming outlet. The listing page renders each entry as an
//! `<article class="feed">` fragment containing the headline, the article
//! link, and usually a human-readable date.
//!
//! Extraction is tolerant by design: a feed item missing its headline or
//! link is skipped without failing the run, and a page with no matching
//! fragments at all yields a successful empty list.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};

use crate::errors::FetchError;
use crate::models::{Article, DATE_FORMAT};

/// Only the first 10 feed items are extracted, in document order.
pub const MAX_ARTICLES: usize = 10;

static FEED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article.feed").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("time").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Fetch the listing page and extract up to [`MAX_ARTICLES`] articles.
///
/// # Returns
///
/// The extracted articles in page order. An empty vector means the page had
/// no usable feed items; it is not an error.
///
/// # Errors
///
/// [`FetchError::Http`] if the request fails outright,
/// [`FetchError::Status`] if the server answers with a non-success status.
#[instrument(level = "info", skip(client))]
pub async fn fetch_articles(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Article>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let articles = parse_articles(&body);
    info!(count = articles.len(), url, "Extracted articles from listing page");
    Ok(articles)
}

/// Parse feed items out of listing-page HTML.
///
/// Takes the first [`MAX_ARTICLES`] `article.feed` fragments in document
/// order, then drops any candidate missing a headline or a link.
pub fn parse_articles(html: &str) -> Vec<Article> {
    let document = Html::parse_document(html);

    let mut articles = Vec::new();
    for element in document.select(&FEED_SELECTOR).take(MAX_ARTICLES) {
        match extract_article(element) {
            Some(article) => {
                debug!(title = %article.title, "Found article");
                articles.push(article);
            }
            None => warn!("Skipping feed item without a title or link"),
        }
    }
    articles
}

/// Extract one [`Article`] from a feed fragment.
///
/// The headline is the first `h2` descendant's text, the link is the first
/// `a[href]` descendant's target verbatim. A missing date falls back to
/// the current date.
fn extract_article(element: ElementRef<'_>) -> Option<Article> {
    let title = element
        .select(&TITLE_SELECTOR)
        .next()
        .map(|h| collapse_whitespace(&h.text().collect::<Vec<_>>().join(" ")))
        .filter(|t| !t.is_empty())?;

    let link = element
        .select(&LINK_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
        .filter(|l| !l.is_empty())?;

    let date = element
        .select(&DATE_SELECTOR)
        .next()
        .map(|t| collapse_whitespace(&t.text().collect::<Vec<_>>().join(" ")))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string());

    Some(Article { title, link, date })
}

fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
