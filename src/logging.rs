use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing for the host process.
///
/// - Compact, human-readable lines by default; JSON lines when `json` is set
/// - Default level: INFO (DEBUG for this crate), override via RUST_LOG env
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rihla_core=debug"));

    let result = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        let stdout_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .compact();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stdout_layer)
            .try_init()
    };

    match result {
        Ok(()) => tracing::debug!(json, "Tracing initialized"),
        Err(e) => tracing::debug!("Tracing already initialized: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
