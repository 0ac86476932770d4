//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Wing spar sizing: bending stress and safety factor for carbon tube spars
#[derive(Parser, Debug)]
#[command(name = "spar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// TOML file with default inputs
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank candidate tubes and recommend the smallest passing one (default)
    Rank(RankArgs),

    /// Print the equations reference as markdown
    Equations,

    /// Print the default inputs as TOML, a starting point for --config
    Defaults,
}

/// Inputs for a ranking run. Anything left out comes from --config or the built-in defaults.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct RankArgs {
    /// Aircraft mass (kg)
    #[arg(long)]
    pub mass: Option<f64>,

    /// Wingspan (m)
    #[arg(long)]
    pub span: Option<f64>,

    /// Load factor (g)
    #[arg(long)]
    pub load_factor: Option<f64>,

    /// Gravitational acceleration (m/s²)
    #[arg(long)]
    pub gravity: Option<f64>,

    /// Material allowable strength (MPa)
    #[arg(long)]
    pub strength: Option<f64>,

    /// Target safety factor
    #[arg(long = "target-sf")]
    pub target_sf: Option<f64>,

    /// Candidate tubes as "outer,inner" pairs separated by ';' or newlines, e.g. "10,8;12,8"
    #[arg(long, conflicts_with = "tubes_file")]
    pub tubes: Option<String>,

    /// File with one "outer,inner" pair per line
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub tubes_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
