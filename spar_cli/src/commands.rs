//! Command dispatch

use std::fs;
use std::path::Path;

use chrono::Utc;
use spar_core::candidates::parse_candidates;
use spar_core::equations::generate_equations_markdown;
use spar_core::{SizingDefaults, SizingRequest};
use tracing::{debug, info};

use crate::args::{Cli, Commands, RankArgs};
use crate::error::{CliError, CliResult};
use crate::report::render_report;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let defaults = match &cli.config {
        Some(path) => SizingDefaults::load(path)?,
        None => SizingDefaults::default(),
    };

    match &cli.command {
        None => run_rank(&defaults, &RankArgs::default()),
        Some(Commands::Rank(args)) => run_rank(&defaults, args),
        Some(Commands::Equations) => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
        Some(Commands::Defaults) => {
            print!("{}", defaults.to_toml_string()?);
            Ok(())
        }
    }
}

/// Layer explicit flags over the configured defaults.
pub fn resolve_inputs(defaults: &SizingDefaults, args: &RankArgs) -> CliResult<SizingDefaults> {
    let candidates = match (&args.tubes, &args.tubes_file) {
        (Some(inline), _) => inline.replace(';', "\n"),
        (None, Some(path)) => read_tubes_file(path)?,
        (None, None) => defaults.candidates.clone(),
    };

    Ok(SizingDefaults {
        mass_kg: args.mass.unwrap_or(defaults.mass_kg),
        span_m: args.span.unwrap_or(defaults.span_m),
        load_factor: args.load_factor.unwrap_or(defaults.load_factor),
        gravity_mps2: args.gravity.unwrap_or(defaults.gravity_mps2),
        allowable_strength_mpa: args.strength.unwrap_or(defaults.allowable_strength_mpa),
        target_safety_factor: args.target_sf.unwrap_or(defaults.target_safety_factor),
        candidates,
    })
}

fn read_tubes_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn run_rank(defaults: &SizingDefaults, args: &RankArgs) -> CliResult<()> {
    let inputs = resolve_inputs(defaults, args)?;
    let parsed = parse_candidates(&inputs.candidates);
    debug!(
        accepted = parsed.geometries.len(),
        skipped = parsed.skipped.len(),
        "parsed candidate tubes"
    );

    if parsed.is_empty() {
        return Err(CliError::NoTubes);
    }

    let request = SizingRequest {
        load: inputs.load_inputs(),
        material: inputs.material(),
        candidates: parsed.geometries.clone(),
    };
    let report = request.calculate()?;
    info!(evaluated = report.evaluations.len(), "ranking done");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, &parsed, Utc::now()));
    }
    Ok(())
}
