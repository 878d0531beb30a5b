use tracing_subscriber::EnvFilter;

use crate::LogSettings;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `settings.level`. An unparsable level falls back to
/// `info`.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    if settings.json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
