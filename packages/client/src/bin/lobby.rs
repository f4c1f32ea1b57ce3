//! Render harness for the pending-game screen.
//!
//! Loads a store snapshot from a JSON file and prints the formatted lobby
//! screen. Useful for eyeballing status derivation against captured
//! snapshots without a browser or a lobby server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin muster-lobby -- --snapshot snapshot.json
//! ```

use std::path::PathBuf;

use clap::Parser;

use muster_client::{
    formatter::LobbyFormatter,
    pending::{self, UiState},
    store::LobbySnapshot,
};
use muster_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "muster-lobby")]
#[command(about = "Render a pending-game lobby screen from a snapshot file", long_about = None)]
struct Args {
    /// Path to a JSON file holding a store snapshot
    #[arg(short = 's', long)]
    snapshot: PathBuf,
}

fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let raw = match std::fs::read_to_string(&args.snapshot) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", args.snapshot.display(), e);
            std::process::exit(1);
        }
    };

    let snapshot: LobbySnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to parse snapshot: {}", e);
            std::process::exit(1);
        }
    };

    let (ui, _) = pending::apply_snapshot(UiState::default(), &snapshot);

    match LobbyFormatter::format_lobby(&snapshot, &ui) {
        Ok(screen) => {
            print!("{}", screen);
            print!("{}", LobbyFormatter::format_rendered_at(&SystemClock));
        }
        Err(e) => {
            tracing::error!("Failed to render lobby: {}", e);
            std::process::exit(1);
        }
    }
}
