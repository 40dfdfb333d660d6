//! Append-only audit log.
//!
//! One file per local day, `<dir>/<YYYY-MM-DD>.log`, one entry per event:
//! `HH:MM:SS <> text`. Write failures are reported and otherwise ignored.

use chrono::{Local, NaiveDate, NaiveTime};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Separator between timestamp and text.
const SEPARATOR: &str = " <> ";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to write audit log {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Timestamped append-only log of everything sent and received.
#[derive(Debug, Clone)]
pub struct AuditLog {
    dir: PathBuf,
}

impl AuditLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File receiving entries written on `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.log", date.format("%Y-%m-%d")))
    }

    /// Append one entry stamped with the current local time.
    pub async fn append(&self, text: &str) -> Result<(), AuditError> {
        let now = Local::now();
        let path = self.path_for(now.date_naive());
        let entry = format_entry(now.time(), text);

        write_entry(&self.dir, &path, &entry)
            .await
            .map_err(|source| AuditError::Write { path, source })
    }

    /// Append one entry, reporting but swallowing any failure.
    pub async fn record(&self, text: &str) {
        if let Err(e) = self.append(text).await {
            warn!(error = %e, "audit log write failed");
        }
    }
}

fn format_entry(time: NaiveTime, text: &str) -> String {
    let text = text.trim_end_matches(['\r', '\n']);
    format!("{}{SEPARATOR}{text}\n", time.format("%H:%M:%S"))
}

async fn write_entry(dir: &Path, path: &Path, entry: &str) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(entry.as_bytes()).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_entry(time, "QUIT\r\n"), "09:05:07 <> QUIT\n");
        assert_eq!(format_entry(time, "PING :x\r"), "09:05:07 <> PING :x\n");
    }

    #[test]
    fn test_path_for_date() {
        let log = AuditLog::new("/var/log/slircbot");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            log.path_for(date),
            PathBuf::from("/var/log/slircbot/2024-03-09.log")
        );
    }

    #[tokio::test]
    async fn test_append_creates_dir_and_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let log = AuditLog::new(tmp.path().join("nested"));

        log.append("first").await.unwrap();
        log.append("second\r\n").await.unwrap();

        let path = log.path_for(Local::now().date_naive());
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" <> first"));
        assert!(lines[1].ends_with(" <> second"));
    }

    #[tokio::test]
    async fn test_append_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let log = AuditLog::new(&blocker);
        let err = log.append("lost").await.unwrap_err();
        assert!(matches!(err, AuditError::Write { .. }));

        // record() must swallow the same failure.
        log.record("lost").await;
    }
}
