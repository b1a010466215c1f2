//! Wallpaper management for KunsOS sessions
//!
//! Covers the `kuns wallpaper` subcommands: recording a preferred wallpaper
//! and the autostarted setup run that applies one once Enlightenment is up.

pub mod cli;
pub mod commands;
pub mod config;
pub mod enlightenment;
pub mod lock;
pub mod logging;
pub mod setup;
