use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::scrape::{placeholder_content, SectionFetcher, SectionMap};

struct Slot {
    sections: SectionMap,
    fetched_at: Option<DateTime<Utc>>,
}

/// Process-wide cache of the last successful scrape, refreshed at most once
/// per interval.
pub struct ContentCache {
    fetcher: Arc<dyn SectionFetcher>,
    interval: Duration,
    slot: Mutex<Slot>,
}

impl ContentCache {
    pub fn new(fetcher: Arc<dyn SectionFetcher>, interval: Duration) -> Self {
        Self {
            fetcher,
            interval,
            slot: Mutex::new(Slot {
                sections: SectionMap::new(),
                fetched_at: None,
            }),
        }
    }

    /// Returns the cached mapping unchanged while it is fresh; otherwise
    /// refreshes through the fetcher. The lock is held across the refresh so
    /// concurrent stale requests trigger a single outbound fetch.
    ///
    /// A failed refresh yields the placeholder mapping without storing it, so
    /// the next request retries immediately.
    pub async fn get_content(&self) -> SectionMap {
        let mut slot = self.slot.lock().await;

        if let Some(fetched_at) = slot.fetched_at {
            if !slot.sections.is_empty() && Utc::now() - fetched_at < self.interval {
                debug!("serving cached site content");
                return slot.sections.clone();
            }
        }

        match self.fetcher.fetch().await {
            Ok(sections) => {
                info!("refreshed site content");
                slot.sections = sections.clone();
                slot.fetched_at = Some(Utc::now());
                sections
            }
            Err(err) => {
                warn!("site scrape failed, serving placeholders: {}", err);
                placeholder_content()
            }
        }
    }
}
