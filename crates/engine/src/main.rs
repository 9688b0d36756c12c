//! Coven Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coven_engine::infrastructure::voice::ConsoleVoice;
use coven_engine::use_cases::{AssembleWitch, TransformFamiliar};
use coven_engine::CovenConfig;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root, then from the working directory.
    load_dotenv_from_repo_root();
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coven_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Coven Engine");

    let config = CovenConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let assembled = AssembleWitch::new().execute(&config);
    if !assembled.rejected.is_empty() {
        tracing::info!(
            rejected = assembled.rejected.len(),
            "Some incantations were not magic words"
        );
    }

    let transform = TransformFamiliar::new(Arc::new(ConsoleVoice::new()));
    transform.execute(&assembled.witch);
    println!();

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
