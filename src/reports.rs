//! Append-only log of crowd wait-time reports.
//!
//! The log is one JSON document on disk. Every write reloads the whole
//! document, appends, and rewrites it in full, so each save is
//! all-or-nothing. A missing or corrupt document degrades to an empty log
//! instead of failing the caller; crowd data is best-effort by design.
//!
//! The in-process mutex makes the read-append-rewrite cycle atomic within
//! one server. Concurrent writers from separate processes can still race
//! (last writer wins), same as the id scheme below not being a trustworthy
//! primary key.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One crowd-sourced wait observation. Never mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Derived from log length at insertion time, not guaranteed unique
    /// across concurrent writers.
    pub id: u32,
    pub restaurant_id: u32,
    pub wait_minutes: u32,
    pub created_at: DateTime<Utc>,
}

pub struct ReportLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ReportLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the entire log. Callers do their own time-window filtering.
    pub fn load(&self) -> Vec<Report> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };

        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("Corrupt report log at {:?}, treating as empty: {e}", self.path);
            Vec::new()
        })
    }

    /// Appends one report and rewrites the whole document.
    pub fn add(
        &self,
        restaurant_id: u32,
        wait_minutes: u32,
        created_at: DateTime<Utc>,
    ) -> std::io::Result<Report> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut reports = self.load();
        let report = Report {
            id: reports.len() as u32 + 1,
            restaurant_id,
            wait_minutes,
            created_at,
        };
        reports.push(report.clone());

        let mut file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&mut file, &reports)?;
        file.flush()?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in(dir: &tempfile::TempDir) -> ReportLog {
        ReportLog::new(dir.path().join("reports.json"))
    }

    #[test]
    fn missing_file_is_an_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        assert!(log_in(&dir).load().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("reports.json"), "{not json").unwrap();
        assert!(log_in(&dir).load().is_empty());
    }

    #[test]
    fn appends_with_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(&dir);

        let first = log.add(3, 10, Utc::now()).unwrap();
        let second = log.add(7, 45, Utc::now()).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let reports = log.load();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].restaurant_id, 7);
        assert_eq!(reports[1].wait_minutes, 45);
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.json");

        ReportLog::new(path.clone()).add(1, 20, Utc::now()).unwrap();
        let reopened = ReportLog::new(path);
        assert_eq!(reopened.load().len(), 1);
        assert_eq!(reopened.add(1, 25, Utc::now()).unwrap().id, 2);
    }
}
