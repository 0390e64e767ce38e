//! Writing the transformed schedule to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::pipeline::Schedule;

/// Errors while writing the schedule.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize schedule: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the schedule as pretty-printed JSON.
///
/// Creates parent directories if they don't exist.
pub fn write_schedule(schedule: &Schedule, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(schedule)?;
    std::fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), trips = schedule.trips.len(), "wrote schedule");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agency::UpExpressRules;
    use crate::feed::Feed;
    use crate::pipeline::Pipeline;
    use tempfile::tempdir;

    fn empty_schedule() -> Schedule {
        Pipeline::new(UpExpressRules::default())
            .run(&Feed::default())
            .unwrap()
    }

    #[test]
    fn writes_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schedule.json");

        write_schedule(&empty_schedule(), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["agency"]["color"], "555025");
        assert_eq!(written["agency"]["route_type"], 2);
        assert_eq!(written["trips"], serde_json::json!([]));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("schedule.json");

        write_schedule(&empty_schedule(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_reports_write_error() {
        let dir = tempdir().unwrap();
        // A directory can't be overwritten by a file
        let err = write_schedule(&empty_schedule(), dir.path()).unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
    }
}
