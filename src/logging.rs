use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Ok;
use chrono::Local;
use dirs::home_dir;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

/// Append-only per-project log file. Build output and status lines for a
/// repository end up in `~/.buildwatch/logs/<project>.log`.
#[derive(Debug, Clone)]
pub struct Logger {
    file: Arc<Mutex<tokio::fs::File>>,
    path: PathBuf,
}

impl Logger {
    pub async fn new(path: &std::path::Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        let file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .await?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Log file location for a project name.
    pub fn path_for(project: &str) -> PathBuf {
        let base = home_dir().unwrap_or_else(|| {
            std::env::current_dir().expect("Failed to get current directory")
        });
        base.join(".buildwatch").join("logs").join(format!("{project}.log"))
    }

    pub async fn init_logs() -> anyhow::Result<()> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("Failed to find HOME directory"))?;
        let log_dir = home.join(".buildwatch").join("logs");

        if !fs::try_exists(&log_dir).await? {
            fs::create_dir_all(&log_dir).await?;
            println!("init logs directory : {}", log_dir.display());
        }
        Ok(())
    }

    pub async fn log(&self, level: &str, msg: &str) -> anyhow::Result<()> {
        let mut f = self.file.lock().await;
        let now = Local::now();
        let line = format!("[{}] {}: {}\n", now.format("%Y-%m-%d %H:%M:%S"), level, msg);
        f.write_all(line.as_bytes()).await?;
        f.flush().await?;
        Ok(())
    }

    pub async fn info(&self, msg: &str) -> anyhow::Result<()> {
        self.log("INFO", msg).await
    }

    pub async fn warning(&self, msg: &str) -> anyhow::Result<()> {
        self.log("WARNING", msg).await
    }

    pub async fn error(&self, msg: &str) -> anyhow::Result<()> {
        self.log("ERROR", msg).await
    }

    /// Append raw command output without a level prefix.
    pub async fn raw(&self, text: &str) -> anyhow::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let mut f = self.file.lock().await;
        f.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            f.write_all(b"\n").await?;
        }
        f.flush().await?;
        Ok(())
    }

    pub async fn clean(&self) -> anyhow::Result<()> {
        fs::remove_file(&self.path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to remove log file {:?} : {e}", self.path))?;
        Ok(())
    }

    pub fn get_path(&self) -> PathBuf {
        self.path.clone()
    }
}
