//! Logging setup.

use tracing_subscriber::FmtSubscriber;

/// Initialize logging at the given level.
///
/// Log lines go to stderr so that stdout only carries the user-facing
/// progress messages.
pub fn init_logging(level: tracing::Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }
}
