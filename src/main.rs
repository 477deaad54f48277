//! prreview CLI entry point
//!
//! One binary installed as `rpr`, `crp` and `rrpr`; the invoked name picks
//! the operation.

use clap::Parser;

use prreview::cli::commands::run_command;
use prreview::cli::{Output, ReviewContext};
use prreview::core::command::select_command;
use prreview::telemetry::{init_telemetry, TelemetryConfig};

#[derive(Parser)]
#[command(author, version, about = "Pull request review helper", long_about = None)]
struct Cli {
    /// PR number or backup name
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Show debug output, including every executed command
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let (command, argv) = match select_command(std::env::args().collect()) {
        Ok(selected) => selected,
        Err(e) => {
            Output::error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let cli = Cli::parse_from(argv);

    if let Err(e) = init_telemetry(&TelemetryConfig::for_verbosity(cli.verbose)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let ctx = match std::env::current_dir() {
        Ok(dir) => ReviewContext::for_project(dir),
        Err(e) => {
            Output::error(&format!("Cannot determine the working directory: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&ctx, command, &cli.args).await {
        Output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
