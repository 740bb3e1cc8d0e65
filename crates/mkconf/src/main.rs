//! mkconf CLI - `mkdocs.yml` generator.
//!
//! Reads site settings from the environment (and `.env`), builds the `nav`
//! tree from the documentation directory and writes the combined document.

mod document;
mod error;
mod generate;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use generate::GenerateArgs;
use output::Output;

/// mkconf - Generate mkdocs.yml from environment settings and a docs directory.
#[derive(Parser)]
#[command(name = "mkconf", version, about)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise defer to RUST_LOG
    let filter = if cli.generate.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.generate.execute() {
        output.failed(&err);
        std::process::exit(1);
    }
}
