//! # Logging Setup
//!
//! Production emits bunyan-formatted JSON lines; development uses the
//! human-readable `fmt` layer. Both honor `RUST_LOG`.

use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

use crate::config::AppEnv;

const DEFAULT_FILTER: &str = "service_template=debug,tower_http=debug";

/// Installs the global tracing subscriber. Fails if one is already set.
pub fn init_tracing(app_env: AppEnv) -> Result<(), SetGlobalDefaultError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match app_env {
        AppEnv::Production => {
            let formatting_layer =
                BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), std::io::stdout);
            let subscriber = Registry::default()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(formatting_layer);
            set_global_default(subscriber)
        }
        AppEnv::Development => {
            let subscriber = Registry::default()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer());
            set_global_default(subscriber)
        }
    }
}
