//! Readiness-gated wallpaper application.
//!
//! The live session autostarts `kuns wallpaper setup` while Enlightenment is
//! still booting, so the procedure first waits for the session control
//! endpoint to answer a read-only query, then walks a priority-ordered
//! candidate list and applies the first usable image via a fixed fallback
//! chain. Everything it decides is appended to a log file in the user's
//! home directory.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

use crate::common::display_server;
use crate::common::paths;
use crate::wallpaper::enlightenment::SessionControl;
use crate::wallpaper::lock::{self, Acquisition, HeldLock};
use crate::wallpaper::logging::SetupLogger;

/// Fatal outcomes of a setup run.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("desktop session did not become ready after {attempts} probes")]
    ReadinessTimeout { attempts: u32 },
    #[error("failed to set any wallpaper")]
    NoCandidateApplied,
    #[error("wallpaper setup interrupted by signal")]
    Interrupted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetupOutcome {
    /// A wallpaper was applied from the given candidate path.
    Applied(PathBuf),
    /// Another invocation holds the lock; nothing was done.
    AlreadyRunning,
}

/// Timing knobs for the procedure. The defaults match the live image; tests
/// shrink them to run in milliseconds.
#[derive(Debug, Clone)]
pub struct SetupTiming {
    /// Slept before anything else, while the session begins starting.
    pub initial_delay: Duration,
    /// Spacing between readiness probes.
    pub poll_interval: Duration,
    /// Probe attempts before giving up on the session.
    pub max_probes: u32,
    /// Slept after the first successful probe; the session answers queries
    /// a little before it accepts background changes.
    pub grace_delay: Duration,
    /// Slept between the direct and the zone-qualified attempt.
    pub retry_delay: Duration,
    /// Slept after a shell restart before the final attempt.
    pub restart_settle: Duration,
}

impl Default for SetupTiming {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(10),
            poll_interval: Duration::from_secs(1),
            max_probes: 60,
            grace_delay: Duration::from_secs(5),
            retry_delay: Duration::from_secs(2),
            restart_settle: Duration::from_secs(3),
        }
    }
}

/// Filesystem layout of one setup run.
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub lock_file: PathBuf,
    pub log_file: PathBuf,
    /// Candidate wallpapers, most preferred first.
    pub candidates: Vec<PathBuf>,
}

impl SetupPaths {
    /// Production layout rooted at the user's home directory. A configured
    /// wallpaper, when present, outranks every stock candidate.
    pub fn for_home(home: &Path, configured: Option<&str>) -> Self {
        let mut candidates = Vec::new();
        if let Some(path) = configured {
            candidates.push(PathBuf::from(path));
        }

        let backgrounds = home.join(".e/e/backgrounds");
        candidates.push(backgrounds.join("default-wallpaper.edj"));
        candidates.push(backgrounds.join("default-wallpaper.png"));
        candidates.push(backgrounds.join("background-image.png"));
        candidates.push(PathBuf::from(
            "/usr/share/backgrounds/kuns/default-wallpaper.png",
        ));
        candidates.push(PathBuf::from("/usr/share/backgrounds/default-wallpaper.png"));
        candidates.push(PathBuf::from(
            "/usr/share/enlightenment/data/backgrounds/default.edj",
        ));

        Self {
            lock_file: paths::wallpaper_setup_lock(home),
            log_file: paths::wallpaper_setup_log(home),
            candidates,
        }
    }
}

/// One step of the per-candidate fallback chain, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Strategy {
    DirectSet,
    ZoneSet,
    RestartThenSet,
}

const STRATEGIES: [Strategy; 3] = [
    Strategy::DirectSet,
    Strategy::ZoneSet,
    Strategy::RestartThenSet,
];

impl Strategy {
    fn describe(self) -> &'static str {
        match self {
            Strategy::DirectSet => "direct set",
            Strategy::ZoneSet => "zone set",
            Strategy::RestartThenSet => "set after restart",
        }
    }
}

fn outcome(ok: bool) -> &'static str {
    if ok { "ok" } else { "failed" }
}

pub struct WallpaperSetup<C> {
    paths: SetupPaths,
    client: C,
    timing: SetupTiming,
    logger: SetupLogger,
}

impl<C: SessionControl> WallpaperSetup<C> {
    pub fn new(paths: SetupPaths, client: C, timing: SetupTiming, echo: bool) -> Self {
        let logger = SetupLogger::new(&paths.log_file, echo);
        Self {
            paths,
            client,
            timing,
            logger,
        }
    }

    /// Run the whole procedure once. The lock is released on every exit
    /// path out of this function, including cancellation and termination
    /// signals.
    pub async fn run(&self) -> Result<SetupOutcome> {
        sleep(self.timing.initial_delay).await;

        let _guard = match lock::try_acquire(&self.paths.lock_file)? {
            Acquisition::Held(held) => {
                self.log_held(&held);
                return Ok(SetupOutcome::AlreadyRunning);
            }
            Acquisition::Acquired(guard) => guard,
        };

        match display_server::session_identifier() {
            Some(display) => self
                .logger
                .log(&format!("starting wallpaper setup (display {display})")),
            None => self.logger.log("starting wallpaper setup (no display)"),
        }

        tokio::select! {
            result = self.apply_first_usable() => result,
            _ = shutdown_signal() => {
                self.logger.log("interrupted, cleaning up");
                Err(SetupError::Interrupted.into())
            }
        }
    }

    fn log_held(&self, held: &HeldLock) {
        match held.pid {
            Some(pid) if held.alive => self
                .logger
                .log(&format!("setup already running (pid {pid}), nothing to do")),
            Some(pid) => self.logger.log(&format!(
                "lock file held by pid {pid} which is gone; delete {} to re-run",
                self.paths.lock_file.display()
            )),
            None => self.logger.log("lock file present, nothing to do"),
        }
    }

    async fn apply_first_usable(&self) -> Result<SetupOutcome> {
        self.wait_for_session().await?;
        sleep(self.timing.grace_delay).await;

        for candidate in &self.paths.candidates {
            if !candidate.exists() {
                self.logger.log(&format!(
                    "candidate {} not found, skipping",
                    candidate.display()
                ));
                continue;
            }

            if self.apply_candidate(candidate).await {
                self.logger
                    .log(&format!("wallpaper set to {}", candidate.display()));
                let listed = self.client.list_backgrounds();
                self.logger
                    .log(&format!("post-apply background list: {}", outcome(listed)));
                return Ok(SetupOutcome::Applied(candidate.clone()));
            }

            self.logger
                .log(&format!("all strategies failed for {}", candidate.display()));
        }

        self.logger.log("failed to set any wallpaper");
        Err(SetupError::NoCandidateApplied.into())
    }

    async fn wait_for_session(&self) -> Result<()> {
        for attempt in 1..=self.timing.max_probes {
            if self.client.list_backgrounds() {
                self.logger
                    .log(&format!("desktop ready after {attempt} probes"));
                return Ok(());
            }
            sleep(self.timing.poll_interval).await;
        }

        self.logger.log(&format!(
            "desktop not ready after {} probes, giving up",
            self.timing.max_probes
        ));
        Err(SetupError::ReadinessTimeout {
            attempts: self.timing.max_probes,
        }
        .into())
    }

    async fn apply_candidate(&self, path: &Path) -> bool {
        for strategy in STRATEGIES {
            self.prepare(strategy).await;
            let ok = self.invoke(strategy, path);
            self.logger.log(&format!(
                "{} for {}: {}",
                strategy.describe(),
                path.display(),
                outcome(ok)
            ));
            if ok {
                return true;
            }
        }
        false
    }

    /// Delays and shell bounces that precede a strategy's set attempt.
    async fn prepare(&self, strategy: Strategy) {
        match strategy {
            Strategy::DirectSet => {}
            Strategy::ZoneSet => sleep(self.timing.retry_delay).await,
            Strategy::RestartThenSet => {
                let restarted = self.client.restart_shell();
                self.logger
                    .log(&format!("shell restart request: {}", outcome(restarted)));
                sleep(self.timing.restart_settle).await;
            }
        }
    }

    fn invoke(&self, strategy: Strategy, path: &Path) -> bool {
        match strategy {
            Strategy::DirectSet | Strategy::RestartThenSet => self.client.set_background(path),
            Strategy::ZoneSet => self.client.set_background_zone(path, 0),
        }
    }
}

async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let ctrl_c = tokio::signal::ctrl_c();
    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = ctrl_c => {}
                _ = term.recv() => {}
            }
        }
        Err(_) => {
            let _ = ctrl_c.await;
        }
    }
}
