//! socialgraph CLI - follow graph analysis from the command line.

use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use socialgraph::cli::{run, Cli};

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    if let Err(e) = run(cli, &mut stdout.lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
