mod cli;
mod concat;
mod config;
mod error;
mod lister;
mod ordering;
mod output;
mod runner;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::VidcatError;
use crate::runner::run;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = real_main(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn real_main(cli: &Cli) -> Result<(), VidcatError> {
    let config = Config::from_cli(cli)?;
    let report = run(&config, |entries| output::print_listing(config.output, entries))?;
    output::print_report(config.output, &report)
}
