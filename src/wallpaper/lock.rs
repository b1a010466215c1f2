use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Advisory single-instance marker for the wallpaper setup procedure.
///
/// The file holds the decimal pid of the process that created it. Only its
/// existence blocks another run; the pid is read to annotate log messages.
/// The check-then-create window is not atomic, so two truly simultaneous
/// invocations can both pass the check.
#[derive(Debug)]
pub enum Acquisition {
    /// The lock was free and now belongs to this process.
    Acquired(RunLockGuard),
    /// Another invocation got there first (or a previous run left the file
    /// behind).
    Held(HeldLock),
}

/// What is known about a lock file that was already present.
#[derive(Debug, Clone)]
pub struct HeldLock {
    pub pid: Option<u32>,
    pub alive: bool,
}

/// Removes the lock file when dropped, so the lock is released on every
/// exit path out of the owning scope, including future cancellation.
#[derive(Debug)]
pub struct RunLockGuard {
    path: PathBuf,
}

impl Drop for RunLockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Take the lock at `path`, or report who holds it.
pub fn try_acquire(path: &Path) -> Result<Acquisition> {
    if path.exists() {
        return Ok(Acquisition::Held(inspect(path)));
    }

    fs::write(path, std::process::id().to_string())
        .with_context(|| format!("writing lock file {}", path.display()))?;

    Ok(Acquisition::Acquired(RunLockGuard {
        path: path.to_path_buf(),
    }))
}

fn inspect(path: &Path) -> HeldLock {
    let pid = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok());
    let alive = pid.is_some_and(pid_is_alive);
    HeldLock { pid, alive }
}

fn pid_is_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}
