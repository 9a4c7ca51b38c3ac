//! RuleHub demo driver entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rulehub_core::{DemoResult, Dispatcher, StdinAck};

mod cli;
mod demos;
mod output;

use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        // Diagnostics go to stdout; the exit status is the scripting signal.
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> DemoResult<()> {
    tracing::debug!(selector = ?cli.selector, "demo driver invoked");

    let catalog = demos::catalog()?;
    let dispatcher = Dispatcher::new(&catalog);
    dispatcher.dispatch(cli.selector.as_deref(), &mut StdinAck)
}
