//! Tracing configuration for the nuictx binary.
//!
//! Sets up the tracing subscriber with a formatter that drops messages
//! matching configured patterns, so webview pointer chatter does not bury the
//! bridge traffic we actually want to read.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use nui_context::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event formatter that drops messages containing a suppressed pattern.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed_patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false),
            suppressed_patterns,
        }
    }

    fn is_suppressed(&self, message: &str) -> bool {
        self.suppressed_patterns
            .iter()
            .any(|pattern| message.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> std::fmt::Result {
        // Format into a buffer first so the pattern check sees the final text.
        let mut message_buf = String::new();
        self.inner.format_event(ctx, Writer::new(&mut message_buf), event)?;

        if self.is_suppressed(&message_buf) {
            Ok(())
        } else {
            write!(writer, "{message_buf}")
        }
    }
}

/// Install the global subscriber writing to `writer`.
fn install<W>(env_filter: EnvFilter, writer: W, ansi: bool, suppressed: Vec<String>)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer)
        .event_format(FilteringFormatter::new(suppressed));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// - `RUST_LOG` overrides the configured level
/// - messages matching `suppressed_patterns` are dropped
/// - output goes to the configured log file, falling back to stderr
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let suppressed = config.suppressed_patterns.clone();

    let log_file = config
        .log_file
        .as_ref()
        .and_then(|path| File::create(path).ok().map(|file| (path, file)));

    match log_file {
        Some((path, file)) => {
            install(env_filter, Mutex::new(file), false, suppressed);
            tracing::info!("logging to {}", path.display());
        }
        None => install(env_filter, io::stderr, true, suppressed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_suppress_pointer_noise() {
        let formatter = FilteringFormatter::new(LoggingConfig::default().suppressed_patterns);
        assert!(formatter.is_suppressed("Dispatched unknown event: mousemove"));
        assert!(formatter.is_suppressed("SelectionDidChange fired"));
    }

    #[test]
    fn bridge_traffic_is_kept() {
        let formatter = FilteringFormatter::new(LoggingConfig::default().suppressed_patterns);
        assert!(!formatter.is_suppressed("bridge request endpoint=\"clickContext\""));
    }
}
