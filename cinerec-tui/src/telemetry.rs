//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so log records go to the configured file
//! as JSON lines.

use crate::config::TuiConfig;
use crate::error::TuiError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    let env_filter = EnvFilter::try_from_env("CINEREC_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| TuiError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))?;

    tracing::info!(
        api_base_url = %config.api_base_url,
        log_path = %config.log_path.display(),
        "Logging initialized"
    );
    Ok(())
}
