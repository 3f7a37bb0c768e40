//! `skysense` command-line client for the weather proxy.

use clap::Parser;
use common::tracing::init_tracing_pretty;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing_pretty("warn");

    let cmd = cli::Cli::parse();
    if cmd.run().await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
