//! Tracing subscriber setup.

use super::exporter::JournalExporter;
use super::journal::Journal;
use crate::infrastructure::paths::{get_data_dir, journal_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name attached to every span.
const SERVICE_NAME: &str = "Bookshelf";

/// Filter used when `trace_level` is unset or does not parse.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` from `trace_level` feeding an
/// OpenTelemetry layer whose spans land in the span journal.
///
/// # Parameters
///
/// * `config` - Plugin configuration; only `trace_level` is read
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set and parsable as an `EnvFilter` directive
/// 2. Otherwise [`DEFAULT_TRACE_LEVEL`]
///
/// # File Location
///
/// Spans are appended to `bookshelf-spans.json` in the plugin data directory
/// (`~/.local/share/zellij/bookshelf` on the host), one JSON object per line.
///
/// # Initialization Behavior
///
/// Best effort. If the data directory cannot be created, or a subscriber is
/// already installed, this returns without doing anything.
///
/// # Example
///
/// ```no_run
/// use bookshelf::observability::init_tracing;
/// use bookshelf::Config;
///
/// let config = Config {
///     trace_level: Some("bookshelf=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = JournalExporter::new(Journal::new(journal_path()), &resource);
    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();

    let _ = tracing_subscriber::registry()
        .with(trace_filter(config.trace_level.as_deref()))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}

/// Builds the level filter from the configured directive.
///
/// A missing or malformed directive falls back to [`DEFAULT_TRACE_LEVEL`].
fn trace_filter(level: Option<&str>) -> EnvFilter {
    let level = level.unwrap_or(DEFAULT_TRACE_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(filter: &EnvFilter) -> String {
        filter.to_string()
    }

    #[test]
    fn valid_directive_is_used() {
        let expected = directives(&EnvFilter::new("bookshelf=debug"));
        assert_eq!(directives(&trace_filter(Some("bookshelf=debug"))), expected);
    }

    #[test]
    fn missing_or_malformed_directive_falls_back_to_info() {
        let fallback = directives(&EnvFilter::new(DEFAULT_TRACE_LEVEL));
        assert_eq!(directives(&trace_filter(None)), fallback);
        assert_eq!(directives(&trace_filter(Some("bookshelf=loudest"))), fallback);
    }
}
