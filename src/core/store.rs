// src/core/store.rs

use crate::core::paths::StorePaths;
use crate::models::{CommandRecord, StoreCounter};
use colored::Colorize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::ops::Range;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize store content to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Could not replace '{path}' atomically: {source}")]
    Persist {
        path: String,
        #[source]
        source: tempfile::PersistError,
    },
    #[error("There is no records file at '{path}' yet.")]
    MissingRecordsFile { path: String },
}

type StoreResult<T> = Result<T, StoreError>;

/// Owner of the persisted record set and its id counter.
///
/// Every operation works on a full in-memory snapshot: one `load`, mutate,
/// one `save`. There is no file locking; two concurrent processes race and
/// the last writer wins. That is a documented limitation of the tool, not a
/// bug, and this struct is the single seam where locking could be added.
#[derive(Debug, Clone)]
pub struct RecordStore {
    paths: StorePaths,
}

impl RecordStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    /// Reads the full record set.
    ///
    /// A missing or whitespace-only file is an empty store. A file that no
    /// longer parses as a JSON array degrades to an empty store with a
    /// one-line diagnostic instead of crashing; nothing is overwritten until
    /// the next explicit `save`, so the user can still repair the file.
    pub fn load(&self) -> StoreResult<Vec<CommandRecord>> {
        let path = self.paths.records_file();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::error!("corrupt records file at '{}': {}", path.display(), e);
                eprintln!(
                    "{} the records file at '{}' is not a valid JSON array; treating the store as empty until the file is repaired.",
                    "Warning:".yellow().bold(),
                    path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Persists the full record set, sorted ascending by id, as pretty JSON.
    ///
    /// The write goes to a temp file in the same directory and is renamed
    /// over the target, so a failed save leaves the previous content intact
    /// and a partial file is never observable.
    pub fn save(&self, records: &[CommandRecord]) -> StoreResult<()> {
        let mut ordered: Vec<&CommandRecord> = records.iter().collect();
        ordered.sort_by_key(|record| record.id);
        let payload = serde_json::to_string_pretty(&ordered)?;
        write_atomic(&self.paths.records_file(), &payload)
    }

    /// Reads the id counter, defaulting to `nextId == 1` when the file is
    /// missing or blank. A counter file that fails to parse is also treated
    /// as the default; the next mint self-heals it past the highest id.
    pub fn load_counter(&self) -> StoreResult<StoreCounter> {
        let path = self.paths.counter_file();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreCounter::default()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        if raw.trim().is_empty() {
            return Ok(StoreCounter::default());
        }
        match serde_json::from_str(&raw) {
            Ok(counter) => Ok(counter),
            Err(e) => {
                log::warn!(
                    "corrupt counter file at '{}' ({}); falling back to the default counter",
                    path.display(),
                    e
                );
                Ok(StoreCounter::default())
            }
        }
    }

    pub fn save_counter(&self, counter: &StoreCounter) -> StoreResult<()> {
        let payload = serde_json::to_string_pretty(counter)?;
        write_atomic(&self.paths.counter_file(), &payload)
    }

    /// Mints a single fresh id with one counter read-increment-persist.
    pub fn next_id(&self, records: &[CommandRecord]) -> StoreResult<u64> {
        Ok(self.next_id_batch(records, 1)?.start)
    }

    /// Mints `count` consecutive ids in one counter round-trip, for bulk
    /// operations like import. The counter is first advanced past the
    /// highest id present in `records` if it has fallen behind.
    pub fn next_id_batch(&self, records: &[CommandRecord], count: u64) -> StoreResult<Range<u64>> {
        let mut counter = self.load_counter()?;
        let max_id = records.iter().map(|record| record.id).max().unwrap_or(0);
        if counter.next_id <= max_id {
            log::debug!(
                "counter ({}) is behind the highest stored id ({}); self-healing",
                counter.next_id,
                max_id
            );
            counter.next_id = max_id + 1;
        }
        let start = counter.next_id;
        counter.next_id = start + count;
        self.save_counter(&counter)?;
        Ok(start..start + count)
    }

    /// Returns the records file verbatim, for the `raw` subcommand.
    pub fn dump_raw(&self) -> StoreResult<String> {
        let path = self.paths.records_file();
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::MissingRecordsFile {
                path: path.display().to_string(),
            }),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// Writes `contents` to a sibling temp file and renames it over `path`.
fn write_atomic(path: &Path, contents: &str) -> StoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path).map_err(|e| StoreError::Persist {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
