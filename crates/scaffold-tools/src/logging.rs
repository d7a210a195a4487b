use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber writing compact logs to stderr.
///
/// The `RUST_LOG` environment variable takes precedence; otherwise
/// `default_level` (e.g. "warn" or "debug") is used.
pub fn init(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init() {
        // We can only init once per process, so we use a check
        let _ = init("debug");

        debug!("This is a debug message");
        warn!("This is a warning message");
    }
}
