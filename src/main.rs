use clap::Parser;
use dirsort::cli::{Args, run_cli};
use dirsort::config::OrganizeOptions;
use dirsort::logging::init_logging;
use dirsort::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Exits with a usage message when the folder argument is missing.
    let args = Args::parse();
    init_logging(args.verbose);
    let options: OrganizeOptions = args.into();

    match run_cli(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "run failed");
            OutputFormatter::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
