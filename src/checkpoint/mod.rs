//! Optional session export and import.
//!
//! A session normally lives only as long as the process. A checkpoint is
//! an explicit snapshot of one session that a caller can write out and
//! later resume from. Two encodings are supported: JSON for readability
//! and bincode for compactness.

use crate::core::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Encoding of a checkpoint file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Binary,
}

impl Encoding {
    /// `.json` files are JSON; everything else is binary.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Binary,
        }
    }
}

/// Serializable snapshot of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub created_at: DateTime<Utc>,

    /// The captured session
    pub session: Session,
}

impl Checkpoint {
    /// Capture `session` in a new checkpoint.
    pub fn capture(session: &Session) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            session: session.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()
    }

    /// Write the checkpoint to `path`, encoded per its extension.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place, so a reader never sees a partial checkpoint.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        let bytes = match Encoding::for_path(path) {
            Encoding::Json => self.to_json()?.into_bytes(),
            Encoding::Binary => self.to_bytes()?,
        };

        let io_err = |source| CheckpointError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = Path::new(&temp_name);

        fs::write(temp_path, bytes).map_err(io_err)?;
        fs::rename(temp_path, path).map_err(io_err)?;

        info!(path = %path.display(), id = %self.id, "Saved checkpoint");
        Ok(())
    }

    /// Read a checkpoint from `path`, decoded per its extension.
    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        let io_err = |source| CheckpointError::Io {
            path: path.to_path_buf(),
            source,
        };

        let checkpoint = match Encoding::for_path(path) {
            Encoding::Json => Self::from_json(&fs::read_to_string(path).map_err(io_err)?)?,
            Encoding::Binary => Self::from_bytes(&fs::read(path).map_err(io_err)?)?,
        };

        info!(path = %path.display(), id = %checkpoint.id, "Loaded checkpoint");
        Ok(checkpoint)
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{handle_input, Input};

    fn sample_session() -> Session {
        "12*3=s50=4+".chars().fold(Session::new(), |s, c| {
            handle_input(&s, Input::from_char(c).unwrap())
                .unwrap()
                .session
        })
    }

    #[test]
    fn json_restores_session() {
        let checkpoint = Checkpoint::capture(&sample_session());
        let restored = Checkpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();
        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn binary_restores_session() {
        let checkpoint = Checkpoint::capture(&sample_session());
        let restored = Checkpoint::from_bytes(&checkpoint.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.session, checkpoint.session);
        assert_eq!(restored.id, checkpoint.id);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = Checkpoint::capture(&Session::new());
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        assert!(matches!(
            Checkpoint::from_json(&json),
            Err(CheckpointError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(matches!(
            Checkpoint::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(Checkpoint::from_bytes(&[1, 2, 3]).is_err());
    }

    #[test]
    fn encoding_follows_extension() {
        assert_eq!(Encoding::for_path(Path::new("a.json")), Encoding::Json);
        assert_eq!(Encoding::for_path(Path::new("a.JSON")), Encoding::Json);
        assert_eq!(Encoding::for_path(Path::new("a.bin")), Encoding::Binary);
        assert_eq!(Encoding::for_path(Path::new("a")), Encoding::Binary);
    }

    #[test]
    fn save_and_load_round_trip_files() {
        let dir = tempfile::tempdir().unwrap();
        let checkpoint = Checkpoint::capture(&sample_session());

        for name in ["session.json", "session.bin"] {
            let path = dir.path().join(name);
            checkpoint.save(&path).unwrap();
            assert!(!dir.path().join(format!("{name}.tmp")).exists());

            let loaded = Checkpoint::load(&path).unwrap();
            assert_eq!(loaded.session, checkpoint.session);
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Checkpoint::load(Path::new("/nonexistent/session.json")),
            Err(CheckpointError::Io { .. })
        ));
    }
}
