use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;

/// Installs structured logging for a host process embedding the engine.
///
/// `RUST_LOG` wins when set; otherwise the engine's own target is filtered at
/// `config.rust_log`. Returns `false` if a global subscriber was already set.
pub fn init_tracing(config: &EngineConfig) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
