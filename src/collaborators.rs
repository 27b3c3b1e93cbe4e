//! External collaborators at the session boundary: the ad-pair feed and the
//! export log. The session only knows these traits.

use crate::config::AdPair;
use crate::error::{PosterError, PosterResult};
use crate::export::ExportFormat;
use crate::templates::TemplateId;
use chrono::{DateTime, Utc};
use tracing::info;

/// Source of the current ad pair and its rotation
pub trait AdFeed {
    fn current_pair(&self) -> PosterResult<AdPair>;

    /// Move to the next pair (called after a logged export)
    fn advance(&mut self) -> PosterResult<AdPair>;
}

/// Receives one event per completed export
pub trait ExportLog {
    fn record(&mut self, event: &ExportEvent) -> PosterResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportEvent {
    pub template: TemplateId,
    pub format: ExportFormat,
    pub username: String,
    pub timestamp: DateTime<Utc>,
}

/// In-memory rotation over a fixed list of pairs
#[derive(Debug, Clone, Default)]
pub struct RotatingAdFeed {
    pairs: Vec<AdPair>,
    index: usize,
}

impl RotatingAdFeed {
    pub fn new(pairs: Vec<AdPair>) -> Self {
        Self { pairs, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl AdFeed for RotatingAdFeed {
    fn current_pair(&self) -> PosterResult<AdPair> {
        self.pairs
            .get(self.index)
            .cloned()
            .ok_or_else(|| PosterError::Collaborator("at least one ad pair must be configured".into()))
    }

    fn advance(&mut self) -> PosterResult<AdPair> {
        if self.pairs.is_empty() {
            return self.current_pair();
        }
        self.index = (self.index + 1) % self.pairs.len();
        self.current_pair()
    }
}

/// Export log that emits one structured log line per export
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExportLog;

impl ExportLog for TracingExportLog {
    fn record(&mut self, event: &ExportEvent) -> PosterResult<()> {
        info!(
            template = %event.template,
            format = event.format.as_str(),
            username = %event.username,
            timestamp = %event.timestamp.to_rfc3339(),
            "poster exported"
        );
        Ok(())
    }
}
