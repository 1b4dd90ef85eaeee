use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use loan_core::store::SnapshotStore;
use loan_core::wizard::Wizard;
use loan_store_json::JsonFileStore;
use loan_ui::app::App;
use loan_ui::console::ConsoleView;
use loan_ui::export::application_form_text;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive vehicle-loan application wizard.
///
/// Walks the application step by step, validating each step before moving
/// on, and keeps the in-progress application in a local snapshot file so a
/// later run resumes where this one left off.
#[derive(Debug, Parser)]
struct Cli {
    /// Snapshot file holding the in-progress application.
    #[arg(long, default_value = "loan-application.json")]
    data: PathBuf,

    /// Discard any saved application and start fresh.
    #[arg(long)]
    reset: bool,

    /// Write the application form to this path and exit.
    #[arg(long)]
    export: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    debug!("snapshot file {}", cli.data.display());
    let store = Arc::new(JsonFileStore::new(cli.data));

    if cli.reset {
        store.clear().await?;
    }

    let mut wizard = Wizard::new(store, Box::new(ConsoleView::new()));

    if let Some(path) = cli.export {
        wizard.restore().await;
        let text = application_form_text(wizard.state());
        std::fs::write(&path, text)?;
        println!("application form written to {}", path.display());
        return Ok(());
    }

    App::new(wizard).run().await
}
