pub mod sender;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Local};

/// Notification sink. The orchestration only sees this trait; production
/// wires in [`sender::SmtpMailer`], tests substitute an in-memory recorder.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Sends one HTML message; `project` feeds the subject line.
    async fn send(&self, body: &str, project: &str) -> Result<()>;
}

pub fn subject(project: &str) -> String {
    format!("SYSPRO PIPELINE - {project}")
}

fn timestamp(at: DateTime<Local>) -> String {
    at.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// `Build Started FORCED - <project> <ts>`. The double space when not
/// forced is the historical message shape, kept as-is.
pub fn build_started(project: &str, forced: bool, at: DateTime<Local>) -> String {
    format!(
        "Build Started {} - {} {}",
        if forced { "FORCED" } else { "" },
        project,
        timestamp(at)
    )
}

pub fn build_failed(project: &str, at: DateTime<Local>) -> String {
    format!("Build Finished - {} {}<br>Error", project, timestamp(at))
}

pub fn build_succeeded(project: &str, at: DateTime<Local>, duration: Duration) -> String {
    format!(
        "Build Finished - {} {}<br>Success Duration {}",
        project,
        timestamp(at),
        format_duration(duration)
    )
}

/// Seconds with two decimals under a minute, minutes with two decimals
/// otherwise: `45.00s`, `1.50m`.
pub fn format_duration(elapsed: Duration) -> String {
    let seconds = elapsed.num_milliseconds() as f64 / 1000.0;
    let minutes = seconds / 60.0;

    if minutes < 1.0 {
        format!("{seconds:.2}s")
    } else {
        format!("{minutes:.2}m")
    }
}
