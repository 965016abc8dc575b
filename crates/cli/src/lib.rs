//! Configgen CLI
//!
//! Flag parsing, optional JSON input file, and the user-facing report of one
//! pipeline run. The binary in `main.rs` only sets up logging and maps errors
//! to the exit status.

mod args;
mod error;

use std::fs;
use std::path::Path;

use configgen_core::GeneratorInput;
use configgen_runner::{Outcome, OutputRequest, Pipeline};

pub use args::Args;
pub use error::{CliError, Result};

/// Read a JSON generator input file
pub fn load_input_file(path: &Path) -> Result<GeneratorInput> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let input = serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded generator input from {}", path.display());
    Ok(input)
}

/// File input (if any) overlaid with the command line
pub fn collect_input(args: &Args) -> Result<GeneratorInput> {
    let from_flags = args.to_input();
    match &args.config {
        Some(path) => Ok(load_input_file(path)?.merge(from_flags)),
        None => Ok(from_flags),
    }
}

/// Execute one invocation and print its report to stdout
pub fn run(args: &Args, pipeline: &Pipeline) -> Result<Outcome> {
    let input = collect_input(args)?;
    let output = OutputRequest::new(&args.output_dir, args.config_name.clone());
    let outcome = pipeline.run(&input, &output)?;

    match &outcome {
        Outcome::Validated { config, report } => {
            println!(
                "Configuration is valid ({} trading agents, {} warnings)",
                config.total_agents(),
                report.warnings().len()
            );
            if args.verbose {
                println!("{}", serde_json::to_string_pretty(config)?);
            }
        }
        Outcome::BatchUnsupported { .. } => {
            println!("Batch mode is not implemented yet; no configuration was written");
        }
        Outcome::Generated {
            path,
            total_agents,
            ..
        } => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("Generated {} ({} trading agents)", path.display(), total_agents);
            println!("Run with: python {} -c {} -v", path.display(), stem);
        }
    }
    Ok(outcome)
}

/// Handle `--list-templates` and `--template-info`; `true` if one was given
pub fn run_info(args: &Args) -> Result<bool> {
    if args.list_templates {
        print!("{}", configgen_templates::overview());
        return Ok(true);
    }
    if let Some(name) = &args.template_info {
        print!("{}", configgen_templates::describe(name)?);
        return Ok(true);
    }
    Ok(false)
}
