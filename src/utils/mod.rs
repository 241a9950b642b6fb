pub mod paths;

use std::path::Path;
use std::sync::Once;

use crate::errors::TrackerError;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Creates the directory (and any missing parents) when it does not exist.
pub fn ensure_dir(path: &Path) -> Result<(), TrackerError> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
