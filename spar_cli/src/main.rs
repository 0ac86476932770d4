//! # Spar Sizer CLI
//!
//! Terminal front end for the spar sizing engine: collects the aircraft and
//! material inputs, parses the candidate tube list, and prints the ranked
//! results table with the recommended tube.
//!
//! ```text
//! spar rank --mass 5 --span 2 --load-factor 3 --tubes "10,8;12,8;14,10"
//! spar rank --config spar.toml --json
//! spar equations
//! ```

mod args;
mod commands;
mod error;
mod report;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::args::Cli;
use crate::commands::execute_command;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        eprintln!("Error: {}", e);
        if let CliError::Core(core) = &e {
            if let Ok(json) = serde_json::to_string_pretty(core) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // stderr keeps stdout clean for --json
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
