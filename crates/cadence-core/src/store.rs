//! JSON persistence for schedules.
//!
//! A saved record is a small versioned document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": "2024-01-01T09:00:00Z",
//!   "schedule": { "goal": { ... }, "subtasks": [ ... ] }
//! }
//! ```
//!
//! Writes go to a sibling temporary file which is synced and then renamed
//! over the target, so the target path only ever holds a complete record.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use jiff::Timestamp;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::{fs, io::AsyncWriteExt};

use crate::{
    error::{CadenceError, Result},
    models::Schedule,
};

/// Record format version written by this crate.
pub const RECORD_VERSION: u32 = 1;

static TEMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn default_version() -> u32 {
    RECORD_VERSION
}

/// A schedule snapshot as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedRecord {
    /// Format version; records without one are version 1
    #[serde(default = "default_version")]
    pub version: u32,

    /// When the snapshot was written
    pub saved_at: Timestamp,

    /// The schedule itself
    pub schedule: Schedule,
}

#[derive(Serialize)]
struct RecordRef<'a> {
    version: u32,
    saved_at: Timestamp,
    schedule: &'a Schedule,
}

/// Saves `schedule` at `path`, replacing any existing record.
///
/// Returns the `saved_at` timestamp written into the record.
///
/// # Errors
///
/// Returns `CadenceError::Serialization` if the schedule cannot be encoded and
/// `CadenceError::FileSystem` if the directory or file cannot be written. On
/// error the previous record at `path`, if any, is left untouched.
pub async fn save(path: &Path, schedule: &Schedule) -> Result<Timestamp> {
    let saved_at = Timestamp::now();
    let record = RecordRef {
        version: RECORD_VERSION,
        saved_at,
        schedule,
    };
    let json = serde_json::to_vec_pretty(&record)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| fs_error(parent, e))?;
    }

    commit(path, &temp_path_for(path), &json).await?;

    debug!(
        "Saved schedule '{}' with {} subtasks to {}",
        schedule.goal.title(),
        schedule.len(),
        path.display()
    );
    Ok(saved_at)
}

/// Loads the schedule stored at `path`.
///
/// # Errors
///
/// See [`load_record`].
pub async fn load(path: &Path) -> Result<Schedule> {
    load_record(path).await.map(|record| record.schedule)
}

/// Loads the full record stored at `path`.
///
/// # Errors
///
/// - `CadenceError::NotFound` if nothing exists at `path`
/// - `CadenceError::FileSystem` for any other read failure
/// - `CadenceError::MalformedRecord` if the content is not a record document
/// - `CadenceError::InvalidRecord` for an unsupported version or a schedule
///   that violates its invariants
pub async fn load_record(path: &Path) -> Result<SavedRecord> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CadenceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(fs_error(path, e)),
    };

    let record: SavedRecord =
        serde_json::from_slice(&bytes).map_err(|source| CadenceError::MalformedRecord {
            path: path.to_path_buf(),
            source,
        })?;

    if record.version != RECORD_VERSION {
        return Err(CadenceError::InvalidRecord {
            path: path.to_path_buf(),
            reason: format!("Unsupported record version {}", record.version),
        });
    }

    record
        .schedule
        .validate()
        .map_err(|e| CadenceError::InvalidRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!("Loaded schedule saved at {} from {}", record.saved_at, path.display());
    Ok(record)
}

/// Writes `contents` to the fresh file `temp_path` and renames it over
/// `path`. The temp file is removed on failure.
async fn commit(path: &Path, temp_path: &Path, contents: &[u8]) -> Result<()> {
    if let Err(e) = write_synced(temp_path, contents).await {
        if let Err(cleanup) = fs::remove_file(temp_path).await {
            debug!("Could not remove {}: {cleanup}", temp_path.display());
        }
        return Err(e);
    }

    if let Err(e) = fs::rename(temp_path, path).await {
        warn!("Failed to move {} into place", temp_path.display());
        if let Err(cleanup) = fs::remove_file(temp_path).await {
            debug!("Could not remove {}: {cleanup}", temp_path.display());
        }
        return Err(fs_error(path, e));
    }
    Ok(())
}

async fn write_synced(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(|e| fs_error(path, e))?;
    file.write_all(contents).await.map_err(|e| fs_error(path, e))?;
    file.sync_all().await.map_err(|e| fs_error(path, e))
}

/// Hidden sibling of `path`, unique per call.
fn temp_path_for(path: &Path) -> PathBuf {
    let sequence = TEMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schedule".to_string());
    path.with_file_name(format!(".{file_name}.{}.{sequence}.tmp", std::process::id()))
}

fn fs_error(path: &Path, source: std::io::Error) -> CadenceError {
    CadenceError::FileSystem {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/data/out/schedule.json"));
        assert_eq!(temp.parent(), Some(Path::new("/data/out")));

        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".schedule.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn test_temp_path_for_bare_file_name() {
        let temp = temp_path_for(Path::new("schedule.json"));
        assert_eq!(temp.parent(), Some(Path::new("")));
    }

    #[test]
    fn test_temp_paths_differ_between_calls() {
        let path = Path::new("/data/out/schedule.json");
        assert_ne!(temp_path_for(path), temp_path_for(path));
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_previous_record() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("schedule.json");
        std::fs::write(&path, "previous").unwrap();

        // an existing entry at the temp path makes the exclusive create fail
        let temp_path = temp_dir.path().join(".schedule.json.taken.tmp");
        std::fs::create_dir(&temp_path).unwrap();

        let err = commit(&path, &temp_path, b"next").await.unwrap_err();
        assert!(matches!(err, CadenceError::FileSystem { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_record_without_version_defaults() {
        let json = r#"{"saved_at":"2024-01-01T09:00:00Z","schedule":{"goal":{"title":"t","description":"d"},"subtasks":[]}}"#;
        let record: SavedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.version, RECORD_VERSION);
        assert!(record.schedule.is_empty());
    }
}
