//! Data models for scraped articles and the in-memory snapshot.
//!
//! This module defines the two data structures the pipeline moves around:
//! - [`Article`]: one news item extracted from the listing page
//! - [`Snapshot`]: the most recent successful extraction plus its timestamp
//!
//! Dates are display text, never parsed into structured dates; the fixed
//! formats below match what the digest email and the API report.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format for dates shown to readers (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format for timestamps in API responses and the digest footer.
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One news item scraped from the listing page.
///
/// An `Article` is only constructed when both the title and the link were
/// present in the source markup. The link is kept exactly as found in the
/// `href` attribute, relative or absolute; no normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// The hyperlink target, verbatim from the markup.
    pub link: String,
    /// Free-form display text: the page's own date when present, otherwise
    /// the extraction date formatted as [`DATE_FORMAT`].
    pub date: String,
}

/// The most recent successful extraction.
///
/// Created empty at process start and replaced wholesale on every
/// successful extraction; the article list and the timestamp always move
/// together.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Articles in page order, capped at ten.
    pub articles: Vec<Article>,
    /// When the extraction ran; absent until the first success.
    pub last_updated: Option<DateTime<Local>>,
}

impl Snapshot {
    /// The update timestamp rendered with [`DATETIME_FORMAT`], if any.
    pub fn last_updated_display(&self) -> Option<String> {
        self.last_updated
            .map(|t| t.format(DATETIME_FORMAT).to_string())
    }
}
