// Shared helpers for integration tests

#![allow(dead_code)]

use scheduler_pages::{BrowserSession, GuiConfig};
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a tracing subscriber once per test binary.
///
/// Respects `RUST_LOG`; defaults to `scheduler_pages=debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scheduler_pages=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Headless session against a local server base URL.
pub async fn launch_session(base_url: &str) -> Result<BrowserSession, Box<dyn std::error::Error>> {
    let config = GuiConfig::new(url::Url::parse(base_url)?);
    Ok(BrowserSession::launch(&config).await?)
}
