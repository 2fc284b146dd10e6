//! tabsweep CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabsweep_engine::cli::Commands;
use tabsweep_engine::commands::{run_classify, run_config, run_plan, CommandContext};
use tabsweep_engine::{Cli, SweepConfig};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> tabsweep_engine::Result<String> {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(cli.format, cli.verbose, cli.config.clone());

    init_logging(&ctx);

    match &cli.command {
        Commands::Classify(args) => run_classify(args, &ctx),
        Commands::Plan(args) => run_plan(args, &ctx),
        Commands::Config(args) => run_config(args, &ctx),
    }
}

/// Logs go to stderr so stdout stays clean for `--format json`.
///
/// `RUST_LOG` wins; otherwise `--verbose` means debug and the settings file
/// supplies the level. An unreadable settings file falls back to `info` here
/// and is reported by the command that needs it.
fn init_logging(ctx: &CommandContext) {
    let level = if ctx.verbose {
        "debug".to_string()
    } else {
        SweepConfig::load_from(&ctx.config_path)
            .map(|config| config.logging.level)
            .unwrap_or_else(|_| "info".to_string())
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tabsweep_engine={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
