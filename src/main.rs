//! precheck - pre-commit quality gate for PHP projects.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pre-commit quality gate: checks the staged index before a commit lands.
#[derive(Parser)]
#[command(name = "precheck")]
#[command(about = "Pre-commit quality gate for PHP projects")]
#[command(version)]
struct Cli {}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("precheck=info".parse().unwrap()))
        .init();

    let _cli = Cli::parse();

    if let Err(err) = precheck::pipeline::run() {
        eprintln!("{} {}", "●".red(), err);
        std::process::exit(1);
    }
}
