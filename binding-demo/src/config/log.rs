use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "info";

/// Shows the session at `info` unless `RUST_LOG` says otherwise
/// (`RUST_LOG=trace` also prints every broadcast).
pub fn init() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn test_init_should_install_logger() {
        // When
        init();

        // Then
        assert!(
            log::log_enabled!(log::Level::Error),
            "Should initialize global logger"
        );
    }
}
