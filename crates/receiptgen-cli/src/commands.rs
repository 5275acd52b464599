use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::context::ExecutionContext;
use crate::handlers;
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::from_cli(&cli)?;

    match cli.command {
        None => {
            let target = match &ctx.config()?.log_file {
                Some(path) => LogTarget::File(path.clone()),
                None => LogTarget::Silent,
            };
            logging::init(cli.log_level, target)?;
            handlers::app::handle(&ctx)
        }
        Some(Commands::Submit(args)) => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::submit::handle(&ctx, args)
        }
        Some(Commands::Config { command }) => {
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::config::handle(&ctx, command)
        }
    }
}
