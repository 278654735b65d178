use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing::{debug, error, info, warn, Level, Span};

/// Default filter when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "info";

/// Error returned when the global subscriber cannot be installed
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Initialize the tracing system
///
/// Log output goes to stderr so that reports written to stdout stay clean.
/// The filter comes from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
/// Colors are only used when stderr is a terminal.
///
/// Fails if a global subscriber has already been installed.
pub fn init() -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if stderr is attached to a terminal
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
