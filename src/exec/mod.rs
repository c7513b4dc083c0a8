pub mod command;

use chrono::{DateTime, Duration, Local};

/// The fixed two-step build sequence, composed into a single shell
/// invocation run in the repository's working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildCommand {
    pub install: String,
    pub build: String,
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self {
            install: String::from("npm install"),
            build: String::from("npm run build"),
        }
    }
}

impl BuildCommand {
    pub fn composed(&self) -> String {
        format!("{} && {}", self.install, self.build)
    }
}

/// Result of one build run. Replaces a completion callback: the caller gets
/// the classification and the captured output back and decides what to
/// report.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl BuildOutcome {
    pub fn duration(&self) -> Duration {
        self.finished_at - self.started_at
    }
}
