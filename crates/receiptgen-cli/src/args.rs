// NOTE: Launch inputs
//
// The mini app normally runs inside a chat host that hands over init data
// (authenticated user, theme). In the terminal those arrive as flags or
// environment variables; the launch URL stands in for the page query string
// and only supplies a fallback user id.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat, TemplateArg};

#[derive(Parser)]
#[command(name = "receiptgen")]
#[command(about = "Generate payment receipts and have them delivered to chat", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/receiptgen/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Receipt generation service URL (overrides the config file)
    #[arg(long, env = "RECEIPTGEN_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Launch URL or query string carrying a fallback `user_id`
    #[arg(long, env = "RECEIPTGEN_LAUNCH_URL", global = true)]
    pub launch_url: Option<String>,

    /// Host init data (URL-encoded, with a JSON `user` field)
    #[arg(long, env = "RECEIPTGEN_INIT_DATA", global = true)]
    pub init_data: Option<String>,

    /// Host theme params as JSON (`{"bg_color":"#17212b"}`)
    #[arg(long, env = "RECEIPTGEN_THEME_PARAMS", global = true)]
    pub theme_params: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit one receipt request without opening the form
    Submit(SubmitArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct SubmitArgs {
    #[arg(long, value_enum)]
    pub template: Option<TemplateArg>,

    /// Receiver / sender name
    #[arg(long)]
    pub merchant: Option<String>,

    /// Receiver account or phone number
    #[arg(long)]
    pub receiver_id: Option<String>,

    /// Amount in Rupiah, digits only
    #[arg(long)]
    pub amount: Option<String>,

    /// Receipt date (e.g. "16 Okt 2026")
    #[arg(long)]
    pub date: Option<String>,

    /// Receipt time (HH:MM)
    #[arg(long)]
    pub time: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
