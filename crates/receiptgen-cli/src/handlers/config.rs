use anyhow::{Result, bail};
use receiptgen_runtime::Config;

use crate::args::ConfigCommand;
use crate::context::ExecutionContext;
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Plain => {
            println!("# {}", ctx.config_path().display());
            print!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}

fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
