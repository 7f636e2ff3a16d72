use std::path::PathBuf;

use anyhow::Result;
use atlink::app::{run, RunOptions};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "atlink", version, about = "Fuzzy link suggestions for a Markdown vault")]
struct Cli {
    #[arg(long, help = "Enable verbose debug logs")]
    debug: bool,
    #[arg(long, help = "Path to config.toml")]
    config: Option<PathBuf>,
    #[arg(long, help = "Vault directory to index")]
    vault: Option<PathBuf>,
    #[arg(long, help = "Only suggest notes whose path starts with this prefix")]
    folder: Option<String>,
    #[arg(long, help = "Print suggestions for this query instead of opening the picker")]
    query: Option<String>,
    #[arg(long, help = "Print results as JSON")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(RunOptions {
        debug: cli.debug,
        config_path: cli.config,
        vault: cli.vault,
        folder: cli.folder,
        query: cli.query,
        json: cli.json,
    })
}
