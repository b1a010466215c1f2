use anyhow::{Context, Result};
use colored::*;

use crate::common::display_server::DisplayServer;
use crate::wallpaper::cli::{SetArgs, WallpaperCommands};
use crate::wallpaper::config::WallpaperConfig;
use crate::wallpaper::enlightenment::EnlightenmentRemote;
use crate::wallpaper::setup::{SetupOutcome, SetupPaths, SetupTiming, WallpaperSetup};

pub async fn handle_wallpaper_command(command: WallpaperCommands, debug: bool) -> Result<()> {
    match command {
        WallpaperCommands::Set(args) => handle_set(args),
        WallpaperCommands::Setup => handle_setup(debug).await,
    }
}

fn handle_set(args: SetArgs) -> Result<()> {
    let mut config = WallpaperConfig::load()?;
    config.set_wallpaper(args.path.clone())?;
    println!("Wallpaper configured to: {}", args.path.green());
    Ok(())
}

async fn handle_setup(debug: bool) -> Result<()> {
    if debug {
        println!(
            "Display server: {}",
            DisplayServer::detect().name().cyan()
        );
    }

    if !EnlightenmentRemote::is_installed() {
        eprintln!(
            "{}",
            "enlightenment_remote not found in PATH, setup will likely time out".yellow()
        );
    }

    let home = dirs::home_dir().context("Unable to determine home directory")?;
    let config = WallpaperConfig::load().unwrap_or_default();
    let paths = SetupPaths::for_home(&home, config.path.as_deref());
    let setup = WallpaperSetup::new(
        paths,
        EnlightenmentRemote::new(),
        SetupTiming::default(),
        debug,
    );

    match setup.run().await? {
        SetupOutcome::Applied(path) => {
            println!("Wallpaper applied: {}", path.display().to_string().green());
            Ok(())
        }
        SetupOutcome::AlreadyRunning => {
            println!("{}", "Wallpaper setup already handled, nothing to do".yellow());
            Ok(())
        }
    }
}
