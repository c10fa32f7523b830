use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "KAPPA_CERT_LOG";
pub const DEFAULT_FILTER: &str = "kappa_cert=info";

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Filter comes from `KAPPA_CERT_LOG`
/// (e.g. `KAPPA_CERT_LOG=kappa_cert=debug`), defaulting to `kappa_cert=info`.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .try_init();
    });
}
