use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone)]
pub enum WallpaperCommands {
    /// Set the preferred wallpaper
    Set(SetArgs),

    /// Apply a wallpaper once the desktop session is ready
    ///
    /// Waits for enlightenment_remote to respond, then applies the first
    /// usable background from the candidate list. Meant to run once per
    /// session start, in the background.
    Setup,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Path to the wallpaper image
    pub path: String,
}
