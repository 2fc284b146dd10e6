//! Config command handler - inspect and edit the settings file

use crate::cli::{ConfigArgs, ConfigOperation, OutputFormat};
use crate::commands::{to_json, CommandContext};
use crate::config::SweepConfig;
use crate::error::{Result, TabSweepError};

/// Run the config command
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        ConfigOperation::Show => show(ctx),
        ConfigOperation::Get { key } => get(key, ctx),
        ConfigOperation::Set { key, value } => set(key, value, ctx),
        ConfigOperation::Reset => reset(ctx),
        ConfigOperation::Path => Ok(format!("{}\n", ctx.config_path.display())),
    }
}

fn show(ctx: &CommandContext) -> Result<String> {
    let config = ctx.load_config()?;
    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::to_value(&config).map_err(|e| TabSweepError::OutputError {
                message: format!("Failed to serialize config: {}", e),
            })?;
            to_json(&value)
        }
        OutputFormat::Text => Ok(config.display()),
    }
}

fn get(key: &str, ctx: &CommandContext) -> Result<String> {
    let config = ctx.load_config()?;
    config
        .get(key)
        .map(|value| format!("{}\n", value))
        .ok_or_else(|| TabSweepError::ConfigError {
            message: format!("Unknown configuration key: {}", key),
        })
}

fn set(key: &str, value: &str, ctx: &CommandContext) -> Result<String> {
    let mut config = ctx.load_config()?;
    config.set(key, value)?;
    config.save_to(&ctx.config_path)?;
    tracing::debug!("Saved settings to {}", ctx.config_path.display());
    Ok(format!("Set {} = {}\n", key, value))
}

/// Reset does not read the current file, so it also repairs a broken one.
fn reset(ctx: &CommandContext) -> Result<String> {
    SweepConfig::default().save_to(&ctx.config_path)?;
    Ok("Configuration reset to defaults\n".to_string())
}
