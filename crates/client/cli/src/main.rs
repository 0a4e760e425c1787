//! Terminal client entry point.
mod app;
mod autopilot;
mod config;
mod input;
mod presentation;
mod quests;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    setup_logging(&config.session_id)?;

    CliApp::builder(config).build()?.run().await
}

/// File-only logging; stderr belongs to the battle screen.
fn setup_logging(session_id: &Option<String>) -> Result<()> {
    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "skirmish.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    // The writer must outlive every log call, including those in Drop impls.
    std::mem::forget(guard);

    tracing::info!(
        session = %session_id,
        dir = %session_log_dir.display(),
        "logging initialized"
    );

    Ok(())
}

fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("skirmish").join("logs"))
}
