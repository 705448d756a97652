pub mod api;
pub mod cache;
pub mod completion;
pub mod config;
pub mod error;
pub mod prompt;
pub mod scrape;
pub mod shortcut;

use std::sync::Arc;

use cache::ContentCache;
use completion::CompletionClient;
use config::Config;

/// Application state shared across handlers. The cache and completion client
/// are injected here rather than held as ambient globals, so both can be
/// swapped out in tests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<ContentCache>,
    pub completion: Arc<dyn CompletionClient>,
}
