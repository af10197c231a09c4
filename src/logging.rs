//! Scoped log output for callers that want a parse traced at a given level.

use tracing::level_filters::LevelFilter;

/// Run `f` with a stderr fmt subscriber capped at `level` installed for this thread.
pub fn with_level<T>(level: LevelFilter, f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}
