use std::{
    error::Error,
    fmt::Display,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tempfile::NamedTempFile;

use crate::store::PlaylistSource;

/// On-disk shape of the store, `{"m3uUrl": "..."}`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaRecord {
    #[serde(default)]
    m3u_url: SmolStr,
}

#[derive(Debug)]
pub enum StoreError {
    MissingLocation,
    IoError(io::Error),
    JsonError(serde_json::Error),
}

impl StoreError {
    pub fn is_missing_location(&self) -> bool {
        matches!(self, Self::MissingLocation)
    }

    fn is_not_found(&self) -> bool {
        matches!(self, Self::IoError(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLocation => write!(f, "M3U URL required"),
            Self::IoError(e) => e.fmt(f),
            Self::JsonError(e) => e.fmt(f),
        }
    }
}

impl Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonError(value)
    }
}

/// Keeps the configured playlist location in a small JSON file.
///
/// `get` and `set` never fail because of the file: a store that cannot be
/// read looks unconfigured, and a write that fails is only logged.
pub struct PlaylistStore {
    path: PathBuf,
}

impl PlaylistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> PlaylistSource {
        match self.load() {
            Ok(source) => source,
            Err(e) if e.is_not_found() => {
                debug!("No playlist stored at {}", self.path.display());
                PlaylistSource::unconfigured()
            }
            Err(e) => {
                error!("Error loading media from {}: {}", self.path.display(), e);
                PlaylistSource::unconfigured()
            }
        }
    }

    pub fn set(&self, location: impl AsRef<str>) -> Result<(), StoreError> {
        let location = location.as_ref().trim();
        if location.is_empty() {
            return Err(StoreError::MissingLocation);
        }

        info!("Saving M3U URL: {}", location);
        if let Err(e) = self.save(&PlaylistSource::new(location)) {
            error!("Error saving media to {}: {}", self.path.display(), e);
        }

        Ok(())
    }

    pub fn load(&self) -> Result<PlaylistSource, StoreError> {
        let data = fs::read(&self.path)?;
        let record: MediaRecord = serde_json::from_slice(&data)?;
        Ok(PlaylistSource::new(record.m3u_url))
    }

    /// Writes a temporary file next to the record, then renames it over the
    /// record. Every call gets its own temporary file.
    pub fn save(&self, source: &PlaylistSource) -> Result<(), StoreError> {
        let parent = match self.path.parent().filter(|x| !x.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let record = MediaRecord {
            m3u_url: source.as_str().into(),
        };
        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(&serde_json::to_vec(&record)?)?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}
