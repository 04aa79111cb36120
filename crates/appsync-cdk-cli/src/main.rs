//! # appsync-cdk
//!
//! Entry point for the AppSync deployment app. Defines the app, registers
//! `AppSyncCdkStack`, and synthesizes the cloud assembly.

mod app;
mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
