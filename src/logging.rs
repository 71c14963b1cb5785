//! Diagnostic logging setup for the binaries

use tracing::level_filters::LevelFilter;

/// Install a stderr subscriber. `verbosity` is the number of `-v` flags:
/// warnings only by default, debug with one, trace with two or more.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
