//! `taiyaki` — command line front end for the taiyaki order backend.
//!
//! Three command groups mirror the three screens: `staff` (authenticated
//! order management), `display` (public status board) and `wait`
//! (customer wait times). Results are printed as JSON on stdout; logs go
//! to stderr.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::screens::{DisplayAction, WaitAction};
use commands::staff::StaffAction;

/// Taiyaki order CLI.
#[derive(Parser, Debug)]
#[command(name = "taiyaki", about = "Taiyaki order backend client")]
struct Cli {
    /// Backend base URL. For staff commands a URL saved with
    /// `staff set-base-url` takes precedence.
    #[arg(long, global = true, env = "TAIYAKI_API_BASE_URL")]
    base_url: Option<String>,

    /// File holding the staff token and saved base URL.
    #[arg(
        long,
        global = true,
        env = "TAIYAKI_STATE_FILE",
        default_value = "taiyaki-state.json"
    )]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Staff order management (requires a token).
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Public order-status board.
    Display {
        #[command(subcommand)]
        action: DisplayAction,
    },

    /// Customer wait-time screen.
    Wait {
        #[command(subcommand)]
        action: WaitAction,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taiyaki=info,taiyaki_staff=info,taiyaki_display=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Staff { action } => {
            commands::staff::run(action, cli.base_url.as_deref(), &cli.state_file).await
        }
        Commands::Display { action } => {
            commands::screens::run_display(action, cli.base_url.as_deref()).await
        }
        Commands::Wait { action } => {
            commands::screens::run_wait(action, cli.base_url.as_deref()).await
        }
    }
}
