// crates/citydb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, optional gzip) and hands raw lines to
//! the [`CityStore`] builder. Also hosts [`CityCatalog`], the shared snapshot
//! used by long-running services.

use crate::error::{CityDbError, Result};
use crate::model::StoreStats;
use crate::store::CityStore;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

// Single in-process cache so the bundled dataset is parsed once per process.
static DEFAULT_STORE: OnceCell<Arc<CityStore>> = OnceCell::new();

impl CityStore {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "RU.txt"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Load the bundled dataset, parsing it at most once per process.
    pub fn load() -> Result<Arc<Self>> {
        DEFAULT_STORE
            .get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()).map(Arc::new))
            .cloned()
    }

    /// Read and parse a dataset file.
    ///
    /// Rejected lines are skipped and summarized in the log. A missing file
    /// or a read error (including invalid UTF-8) fails the whole load.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(open_stream(path)?);

        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(CityDbError::Io)?;

        let (store, report) = CityStore::from_lines(&lines);

        if report.rejected() > 0 {
            tracing::warn!(
                path = %path.display(),
                rejected = report.rejected(),
                malformed = report.malformed,
                invalid_name = report.invalid_name,
                invalid_number = report.invalid_number,
                "skipped records while loading dataset"
            );
        }
        tracing::info!(
            path = %path.display(),
            cities = store.len(),
            duplicates = report.duplicates,
            "dataset loaded"
        );

        Ok(store)
    }
}

/// Opens a file and, for `.gz` paths, wraps it in a gzip decoder.
/// Returns a generic reader so the caller doesn't care about compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let is_gzip = path.extension().is_some_and(|ext| ext == "gz");

    if is_gzip {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(file)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(CityDbError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(file))
}

/// How a [`CityCatalog`] serves snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Parse once, share the immutable store, swap on [`CityCatalog::reload`].
    #[default]
    Snapshot,
    /// Re-read the source on every [`CityCatalog::snapshot`] call.
    PerRequest,
}

/// A dataset path plus the currently published store.
///
/// Readers clone an `Arc` out of the lock and then query without holding
/// it. Only `reload` takes the write lock, and only for the swap.
#[derive(Debug)]
pub struct CityCatalog {
    source: PathBuf,
    mode: LoadMode,
    current: RwLock<Arc<CityStore>>,
}

impl CityCatalog {
    /// Load `source` eagerly so a bad path fails at startup.
    pub fn open(source: impl Into<PathBuf>, mode: LoadMode) -> Result<Self> {
        let source = source.into();
        let store = CityStore::load_from_path(&source)?;
        Ok(Self {
            source,
            mode,
            current: RwLock::new(Arc::new(store)),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    /// The store queries should run against.
    ///
    /// In [`LoadMode::PerRequest`] this performs blocking file I/O.
    pub fn snapshot(&self) -> Result<Arc<CityStore>> {
        match self.mode {
            LoadMode::Snapshot => Ok(self.current()),
            LoadMode::PerRequest => CityStore::load_from_path(&self.source).map(Arc::new),
        }
    }

    /// Re-read the source and publish it. On failure the previous snapshot
    /// stays in place.
    pub fn reload(&self) -> Result<StoreStats> {
        let store = CityStore::load_from_path(&self.source)?;
        let stats = store.stats();
        let mut guard = self
            .current
            .write()
            .map_err(|_| CityDbError::InvalidData("catalog lock poisoned".into()))?;
        *guard = Arc::new(store);
        Ok(stats)
    }

    /// Stats of the last published snapshot.
    pub fn stats(&self) -> StoreStats {
        self.current().stats()
    }

    fn current(&self) -> Arc<CityStore> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = CityStore::load_from_path("/definitely/not/here/RU.txt").unwrap_err();
        assert!(matches!(err, CityDbError::NotFound(_)));
    }

    #[test]
    fn invalid_utf8_fails_the_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1:Omsk:54.9:73.3:1:Asia/Omsk:6\n\xff\xfe\n").unwrap();
        file.flush().unwrap();
        let err = CityStore::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, CityDbError::Io(_)));
    }

    #[test]
    fn bundled_dataset_loads() {
        let store = CityStore::load().unwrap();
        assert!(store.get("524901").is_some());
        // Hyphenated and multi-word names are filtered out.
        assert!(store.get("498817").is_none());
        assert!(store.get("520555").is_none());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_sources() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RU.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all("1:Омск:54.9:73.3:1129281:Asia/Omsk:6\n".as_bytes())
            .unwrap();
        encoder.finish().unwrap();

        let store = CityStore::load_from_path(&path).unwrap();
        assert_eq!(store.get("1").map(|c| c.name()), Some("Омск"));
    }

    #[test]
    fn snapshot_mode_only_changes_on_reload() {
        let file = write_dataset(&["1:Alpha:1:1:1:UTC:0"]);
        let catalog = CityCatalog::open(file.path(), LoadMode::Snapshot).unwrap();

        std::fs::write(file.path(), "1:Alpha:1:1:1:UTC:0\n2:Beta:2:2:2:UTC:0\n").unwrap();

        assert_eq!(catalog.snapshot().unwrap().len(), 1);
        let stats = catalog.reload().unwrap();
        assert_eq!(stats.cities, 2);
        assert_eq!(catalog.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn per_request_mode_sees_file_changes() {
        let file = write_dataset(&["1:Alpha:1:1:1:UTC:0"]);
        let catalog = CityCatalog::open(file.path(), LoadMode::PerRequest).unwrap();
        std::fs::write(file.path(), "1:Alpha:1:1:1:UTC:0\n2:Beta:2:2:2:UTC:0\n").unwrap();
        assert_eq!(catalog.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RU.txt");
        std::fs::write(&path, "1:Alpha:1:1:1:UTC:0\n").unwrap();

        let catalog = CityCatalog::open(&path, LoadMode::Snapshot).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(catalog.reload().is_err());
        assert_eq!(catalog.stats().cities, 1);
    }
}
