// src/core/transfer.rs
//
// Converts between the internal record shape and a portable JSON array.
// Import is deliberately lenient about the entries themselves (anything
// without a usable command is dropped into a count) but strict about the
// store invariants: every materialized record gets a freshly minted id and
// aliases are de-duplicated before anything is written.

use crate::constants::EXPORT_FILE_PREFIX;
use crate::core::resolver;
use crate::core::store::{RecordStore, StoreError};
use crate::models::{CommandRecord, RecordDraft, StoreCounter};
use chrono::Local;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("'{path}' is not an existing directory.")]
    InvalidPath { path: String },
    #[error("'{path}' does not contain a JSON array of records.")]
    NotAnArray { path: String },
    #[error("No valid records in '{path}': every entry needs a non-empty 'command' field.")]
    NoValidRecords { path: String },
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize the export payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

type TransferResult<T> = Result<T, TransferError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Keep the existing records; imported entries get fresh ids on top.
    Append,
    /// Discard the existing set entirely (destructive, confirm first).
    Replace,
}

/// What an import actually did, for the CLI to report.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Entries discarded for lacking a non-empty command.
    pub skipped_invalid: usize,
    /// Aliases dropped because they were malformed or already taken; their
    /// records were still imported, alias-less.
    pub dropped_aliases: Vec<String>,
}

/// Writes the current record set verbatim (ids included) to a new
/// timestamped file inside `target_dir` and returns the file's path.
pub fn export(store: &RecordStore, target_dir: &Path) -> TransferResult<PathBuf> {
    if !target_dir.is_dir() {
        return Err(TransferError::InvalidPath {
            path: target_dir.display().to_string(),
        });
    }
    let mut records = store.load()?;
    records.sort_by_key(|record| record.id);

    let filename = format!(
        "{}{}.json",
        EXPORT_FILE_PREFIX,
        Local::now().format("%Y%m%d-%H%M%S")
    );
    let target = target_dir.join(filename);
    let payload = serde_json::to_string_pretty(&records)?;
    fs::write(&target, payload)?;
    log::debug!("exported {} record(s) to '{}'", records.len(), target.display());
    Ok(target)
}

/// Imports a portable JSON array from `source` into the store.
///
/// Entries without a non-empty `command` are silently discarded into the
/// report's invalid count; if nothing valid remains the store is untouched.
/// Ids are always re-issued, continuing the global counter in append mode
/// and restarting sequentially in replace mode.
pub fn import(store: &RecordStore, source: &Path, mode: ImportMode) -> TransferResult<ImportReport> {
    let raw = fs::read_to_string(source)?;
    let entries: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(Value::Array(entries)) => entries,
        _ => {
            return Err(TransferError::NotAnArray {
                path: source.display().to_string(),
            });
        }
    };

    let mut drafts = Vec::new();
    let mut skipped_invalid = 0;
    for entry in &entries {
        match read_entry(entry) {
            Some(draft) => drafts.push(draft),
            None => skipped_invalid += 1,
        }
    }
    if drafts.is_empty() {
        return Err(TransferError::NoValidRecords {
            path: source.display().to_string(),
        });
    }

    match mode {
        ImportMode::Append => append(store, drafts, skipped_invalid),
        ImportMode::Replace => replace(store, drafts, skipped_invalid),
    }
}

fn append(
    store: &RecordStore,
    drafts: Vec<RecordDraft>,
    skipped_invalid: usize,
) -> TransferResult<ImportReport> {
    let mut records = store.load()?;
    let mut seen: HashSet<String> = records
        .iter()
        .filter_map(|record| record.alias.as_deref())
        .map(str::to_lowercase)
        .collect();

    let ids = store.next_id_batch(&records, drafts.len() as u64)?;
    let mut report = ImportReport {
        skipped_invalid,
        ..ImportReport::default()
    };
    for (id, draft) in ids.zip(drafts) {
        let alias = claim_alias(draft.alias, &mut seen, &mut report);
        records.push(CommandRecord {
            id,
            alias,
            command: draft.command,
            comment: draft.comment,
        });
        report.imported += 1;
    }

    store.save(&records)?;
    Ok(report)
}

fn replace(
    store: &RecordStore,
    drafts: Vec<RecordDraft>,
    skipped_invalid: usize,
) -> TransferResult<ImportReport> {
    let mut seen = HashSet::new();
    let mut report = ImportReport {
        skipped_invalid,
        ..ImportReport::default()
    };
    let mut records = Vec::with_capacity(drafts.len());
    // The old set is being discarded, so aliases only have to be unique
    // within the incoming batch, and ids restart from 1.
    for (offset, draft) in drafts.into_iter().enumerate() {
        let alias = claim_alias(draft.alias, &mut seen, &mut report);
        records.push(CommandRecord {
            id: offset as u64 + 1,
            alias,
            command: draft.command,
            comment: draft.comment,
        });
        report.imported += 1;
    }

    store.save(&records)?;
    store.save_counter(&StoreCounter {
        next_id: records.len() as u64 + 1,
    })?;
    Ok(report)
}

/// Keeps an alias candidate only when it is well-formed and still free;
/// otherwise records the drop and returns `None` so the record is imported
/// alias-less.
fn claim_alias(
    candidate: Option<String>,
    seen: &mut HashSet<String>,
    report: &mut ImportReport,
) -> Option<String> {
    let alias = candidate?;
    if resolver::is_valid_alias(&alias) && seen.insert(alias.to_lowercase()) {
        Some(alias)
    } else {
        log::warn!("dropping alias '{}' during import", alias);
        report.dropped_aliases.push(alias);
        None
    }
}

/// Pulls a usable draft out of one portable-array entry. Only a non-empty
/// `command` is required; everything else is optional and lenient.
fn read_entry(entry: &Value) -> Option<RecordDraft> {
    let command = entry
        .get("command")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())?;
    Some(RecordDraft {
        command: command.to_string(),
        alias: entry
            .get("alias")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string),
        comment: entry
            .get("comment")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    })
}
