use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Append-only log for the wallpaper setup procedure.
///
/// One `[YYYY-MM-DD HH:MM:SS] message` line per entry. The file is never
/// truncated or rotated. Write failures are swallowed: the log must not be
/// able to take down the run it documents.
#[derive(Debug, Clone)]
pub struct SetupLogger {
    log_file: PathBuf,
    echo: bool,
}

impl SetupLogger {
    pub fn new(log_file: impl Into<PathBuf>, echo: bool) -> Self {
        Self {
            log_file: log_file.into(),
            echo,
        }
    }

    pub fn log(&self, message: &str) {
        let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);

        if self.echo {
            println!("{line}");
        }

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
        {
            let _ = writeln!(file, "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::tempdir;

    #[test]
    fn test_lines_are_timestamped_and_appended() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("setup.log");
        let logger = SetupLogger::new(&log_path, false);

        logger.log("first");
        logger.log("second");

        let contents = std::fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));

        let stamp = lines[0]
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .expect("timestamp prefix");
        NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S")?;
        Ok(())
    }

    #[test]
    fn test_unwritable_log_is_ignored() {
        let logger = SetupLogger::new("/nonexistent-dir/setup.log", false);
        // must not panic or error
        logger.log("goes nowhere");
    }
}
