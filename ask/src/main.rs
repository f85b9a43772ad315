use anyhow::Result;
use ask::{run, Cli};
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // stdout carries only the prompt and answers
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, &mut stdin.lock(), &mut stdout.lock())
}
