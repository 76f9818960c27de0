mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "vitjoy")]
#[command(about = "Browse and inspect the VITJOY product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding catalog.json and display.json
    /// (default: $VITJOY_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Root directory of static image assets
    #[arg(long, global = true)]
    pub assets_root: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
