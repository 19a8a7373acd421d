//! Shared ownership of the in-memory news snapshot.

use chrono::{DateTime, Local};
use tokio::sync::RwLock;

use crate::models::{Article, Snapshot};

/// Owner of the process-wide [`Snapshot`].
///
/// The API handlers and the scheduler share one `NewsState` behind an
/// `Arc`. Writers replace the whole snapshot in a single assignment, so a
/// reader never observes a fresh article list paired with a stale
/// timestamp.
#[derive(Debug, Default)]
pub struct NewsState {
    inner: RwLock<Snapshot>,
}

impl NewsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the current snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    /// Replace the snapshot wholesale, stamping the update time.
    ///
    /// Returns the timestamp written into the new snapshot.
    pub async fn replace(&self, articles: Vec<Article>) -> DateTime<Local> {
        let now = Local::now();
        let mut guard = self.inner.write().await;
        *guard = Snapshot {
            articles,
            last_updated: Some(now),
        };
        now
    }
}
