use std::sync::Arc;

use crate::config::Config;
use crate::extraction::{HeuristicResumeParser, ResumeParser};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable parser backend. Default: HeuristicResumeParser.
    pub parser: Arc<dyn ResumeParser>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            parser: Arc::new(HeuristicResumeParser),
        }
    }
}
