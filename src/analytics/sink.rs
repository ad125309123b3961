use bevy::prelude::*;
use thiserror::Error;

use super::events::AnalyticsEvent;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics sink is not connected")]
    Unavailable,
    #[error("analytics transport failed: {0}")]
    Transport(String),
}

/// Fire-and-forget receiver for gameplay notifications
pub trait AnalyticsSink: Send + Sync + 'static {
    fn track(&mut self, event: &AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Writes every notification to the log
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&mut self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        debug!("analytics {}", event);
        Ok(())
    }
}

/// Installed analytics collaborator.
/// Gameplay never depends on it: when absent nothing is forwarded, and sink
/// failures are counted and logged, never propagated.
#[derive(Resource)]
pub struct Analytics {
    sink: Box<dyn AnalyticsSink>,
    sent: u64,
    failures: u64,
}

impl Analytics {
    pub fn new(sink: impl AnalyticsSink) -> Self {
        Self {
            sink: Box::new(sink),
            sent: 0,
            failures: 0,
        }
    }

    pub fn send(&mut self, event: AnalyticsEvent) {
        match self.sink.track(&event) {
            Ok(()) => self.sent += 1,
            Err(err) => {
                self.failures += 1;
                warn!("Dropped analytics event {}: {}", event.name, err);
            }
        }
    }

    pub fn sent(&self) -> u64 {
        self.sent
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }
}
