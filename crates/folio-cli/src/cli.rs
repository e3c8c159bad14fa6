use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Portfolio admin CLI for creating and editing projects")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
