use std::process::ExitCode;

use clap::Parser;
use configgen_cli::{Args, run, run_info};
use configgen_runner::Pipeline;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match run_info(&args) {
        Ok(true) => Ok(()),
        Ok(false) => run(&args, &Pipeline::system()).map(|_| ()),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_user_error() => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
