use std::path::Path;
use std::process::{Command, Stdio};

/// Command surface of the Enlightenment session used by the setup procedure.
///
/// Every operation maps to one invocation of the session control client; a
/// zero exit is success, a non-zero exit or a failed spawn is failure.
pub trait SessionControl {
    /// List the current desktop backgrounds. Read-only, and doubles as the
    /// readiness probe: the session counts as ready once this succeeds.
    fn list_backgrounds(&self) -> bool;

    /// Set the background on all containers and zones.
    fn set_background(&self, path: &Path) -> bool;

    /// Set the background on one specific zone.
    fn set_background_zone(&self, path: &Path, zone: u32) -> bool;

    /// Restart the session shell process.
    fn restart_shell(&self) -> bool;
}

/// Production client that shells out to `enlightenment_remote`.
#[derive(Debug, Clone)]
pub struct EnlightenmentRemote {
    command: String,
}

impl EnlightenmentRemote {
    pub fn new() -> Self {
        Self {
            command: "enlightenment_remote".to_string(),
        }
    }

    /// Whether the client binary is on PATH at all.
    pub fn is_installed() -> bool {
        which::which("enlightenment_remote").is_ok()
    }

    fn run(&self, args: &[&str]) -> bool {
        Command::new(&self.command)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl Default for EnlightenmentRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionControl for EnlightenmentRemote {
    fn list_backgrounds(&self) -> bool {
        self.run(&["-desktop-bg-list"])
    }

    fn set_background(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        // -1 wildcards apply to every container, zone and desk
        self.run(&["-desktop-bg-add", "-1", "-1", "-1", "-1", &path_str])
    }

    fn set_background_zone(&self, path: &Path, zone: u32) -> bool {
        let path_str = path.to_string_lossy();
        let zone = zone.to_string();
        self.run(&["-desktop-bg-add", "0", &zone, "-1", "-1", &path_str])
    }

    fn restart_shell(&self) -> bool {
        self.run(&["-restart"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(command: &str) -> EnlightenmentRemote {
        EnlightenmentRemote {
            command: command.to_string(),
        }
    }

    #[test]
    fn test_zero_exit_is_success() {
        assert!(client("true").list_backgrounds());
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        assert!(!client("false").list_backgrounds());
    }

    #[test]
    fn test_missing_binary_is_failure() {
        let remote = client("kuns-test-no-such-command");
        assert!(!remote.set_background(Path::new("/tmp/bg.png")));
        assert!(!remote.restart_shell());
    }
}
