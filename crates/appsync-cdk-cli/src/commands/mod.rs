//! CLI command definitions and dispatch.

pub mod ls;
pub mod plan;
pub mod synth;

use std::path::PathBuf;

use appsync_cdk_common::config::AppConfig;
use appsync_cdk_common::constants::{DEFAULT_CONFIG_FILE, OUTDIR_ENV};
use clap::{Parser, Subcommand};

use crate::app::build_app;

/// appsync-cdk — synthesize the AppSync deployment app.
#[derive(Parser, Debug)]
#[command(name = "appsync-cdk", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute. Defaults to synthesizing every stack.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the project configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Cloud assembly output directory (overrides the config file).
    #[arg(long, short, global = true, env = OUTDIR_ENV)]
    pub output: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize the cloud assembly, optionally printing one template.
    Synth(synth::SynthArgs),
    /// List the stacks in the app.
    Ls,
    /// Display each stack's resources in creation order.
    Plan,
}

/// Loads configuration, builds the app, and dispatches the command.
///
/// # Errors
///
/// Returns an error if configuration, app construction, or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let app = build_app(config)?;

    match cli.command {
        None => synth::execute(&app, &synth::SynthArgs::default()),
        Some(Command::Synth(args)) => synth::execute(&app, &args),
        Some(Command::Ls) => ls::execute(&app),
        Some(Command::Plan) => plan::execute(&app),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(output) = &cli.output {
        config.output_dir.clone_from(output);
    }
    tracing::debug!(output = %config.output_dir.display(), "resolved configuration");
    Ok(config)
}
