use serde::{Deserialize, Serialize};
use std::env;

/// Display server types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayServer {
    /// Wayland display server
    Wayland,
    /// X11 display server
    X11,
    /// Unknown or unsupported display server
    Unknown,
}

impl DisplayServer {
    /// Detect the current display server type
    pub fn detect() -> Self {
        // Check XDG_SESSION_TYPE first (most reliable)
        if let Ok(session_type) = env::var("XDG_SESSION_TYPE") {
            match session_type.to_lowercase().as_str() {
                "wayland" => return DisplayServer::Wayland,
                "x11" => return DisplayServer::X11,
                _ => {}
            }
        }

        // Check WAYLAND_DISPLAY environment variable
        if env::var("WAYLAND_DISPLAY").is_ok() {
            return DisplayServer::Wayland;
        }

        // Check DISPLAY environment variable
        if env::var("DISPLAY").is_ok() {
            return DisplayServer::X11;
        }

        DisplayServer::Unknown
    }

    /// Get a human-readable name for the display server
    pub fn name(&self) -> &'static str {
        match self {
            DisplayServer::Wayland => "Wayland",
            DisplayServer::X11 => "X11",
            DisplayServer::Unknown => "Unknown",
        }
    }
}

/// The raw display identifier of the running session, e.g. `:0` on X11.
///
/// Used for log context only; nothing branches on it.
pub fn session_identifier() -> Option<String> {
    env::var("WAYLAND_DISPLAY")
        .or_else(|_| env::var("DISPLAY"))
        .ok()
}
