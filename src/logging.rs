//! Tracing setup. The TUI owns the terminal, so logs go to a file unless
//! stderr is asked for explicitly.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

pub const DEFAULT_LOG_FILE: &str = "pdf-quiz.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `-` means stderr, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            Self::Stderr
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl Default for LogTarget {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(target: &LogTarget, default_level: &str) -> Result<(), QuizError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| QuizError::Logging(e.to_string()))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| QuizError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_means_stderr() {
        assert_eq!(LogTarget::parse("-"), LogTarget::Stderr);
        assert_eq!(
            LogTarget::parse("run.log"),
            LogTarget::File(PathBuf::from("run.log"))
        );
        assert_eq!(
            LogTarget::default(),
            LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }
}
