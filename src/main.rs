use std::process::ExitCode;

use clap::Parser;
use pairalign::cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        // Usage problems are reported on stdout with exit code 1
        Err(e) if e.use_stderr() => {
            println!("{}", e.render());
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pairalign=debug,info")
    } else {
        EnvFilter::new("pairalign=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli::align::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
