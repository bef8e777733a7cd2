//! Armory integrity checker - Main entry point.
//!
//! Exits 0 when every gating check passed, 1 otherwise (including
//! configuration errors and an unreachable store).

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armory_integrity::infrastructure::clock::SystemClock;
use armory_integrity::infrastructure::report_file::write_json_report;
use armory_integrity::infrastructure::supabase::{SupabaseClient, SupabaseRepositories};
use armory_integrity::{CheckIntegrity, IntegrityConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment from repo root (the binary may be run from `crates/integrity`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armory_integrity=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Integrity check aborted: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<bool> {
    let config = IntegrityConfig::from_env().context("loading configuration")?;

    tracing::info!(
        store = %config.store.url,
        gate = %config.check.propagation_gate,
        "Starting item image integrity check"
    );

    let client = SupabaseClient::with_timeout(
        &config.store.url,
        &config.store.service_key,
        config.store.timeout_secs,
    );
    let repos = SupabaseRepositories::new(client);

    let use_case = CheckIntegrity::new(
        repos.item_types,
        repos.items,
        Arc::new(SystemClock::new()),
        config.check.clone(),
    );
    let report = use_case.execute().await?;

    if let Some(path) = &config.report_path {
        match write_json_report(path, &report) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote integrity report"),
            Err(e) => tracing::warn!(
                path = %path.display(),
                "Could not write integrity report: {:#}",
                e
            ),
        }
    }

    Ok(report.passed)
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
