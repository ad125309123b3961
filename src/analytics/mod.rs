pub mod events;
pub mod plugin;
pub mod sink;
pub mod systems;

pub use events::AnalyticsEvent;
pub use plugin::plugin;
pub use sink::{Analytics, AnalyticsError, AnalyticsSink, LogSink};
