mod common;
mod wallpaper;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::wallpaper::cli::WallpaperCommands;

/// KunsCLI main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wallpaper management commands
    Wallpaper {
        #[command(subcommand)]
        command: WallpaperCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("Debug mode is on");
    }

    match cli.command {
        Commands::Wallpaper { command } => {
            wallpaper::commands::handle_wallpaper_command(command, cli.debug).await
        }
    }
}
