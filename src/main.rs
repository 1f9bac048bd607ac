//! One append cycle per invocation; scheduling is left to cron or a timer
//! unit.

use metrics_appender::appender::{Appender, AppenderConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let appender = Appender::from_config(AppenderConfig::default());
    if let Err(e) = appender.run().await {
        log::error!("Metrics append failed: {e}");
        std::process::exit(1);
    }
}
