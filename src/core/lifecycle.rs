// src/core/lifecycle.rs
//
// Create, edit and delete operations over the record store, plus the
// read-only list/find queries. Every mutating operation validates first and
// commits with a single full save, so on-disk state is always either the
// pre-operation or the post-operation set.

use crate::core::resolver::{self, ResolveError};
use crate::core::store::{RecordStore, StoreError};
use crate::models::{CommandRecord, EditRequest, FieldEdit, RecordDraft};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("The command text cannot be empty.")]
    EmptyCommand,
    #[error("Alias '{alias}' is malformed: no whitespace or ':' characters allowed.")]
    MalformedAlias { alias: String },
    #[error("Alias '{alias}' is already taken by record #{taken_by}.")]
    DuplicateAlias { alias: String, taken_by: u64 },
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

type LifecycleResult<T> = Result<T, LifecycleError>;

/// What an edit actually did. Submitting a request that changes no field
/// value is not an error; the store is simply not rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(CommandRecord),
    NoOp,
}

/// Validates a draft, mints a fresh id and persists the new record.
pub fn create(store: &RecordStore, draft: RecordDraft) -> LifecycleResult<CommandRecord> {
    let mut records = store.load()?;

    let command = draft.command.trim().to_string();
    if command.is_empty() {
        return Err(LifecycleError::EmptyCommand);
    }
    let alias = normalize_alias(draft.alias.as_deref(), &records, None)?;
    let comment = normalize_text(draft.comment.as_deref());

    let id = store.next_id(&records)?;
    let record = CommandRecord {
        id,
        alias,
        command,
        comment,
    };
    log::debug!("creating record #{}: {}", record.id, record.command);
    records.push(record.clone());
    store.save(&records)?;
    Ok(record)
}

/// Applies a three-state edit request to the record named by `specifier`.
///
/// All new field values are computed and validated before anything is
/// written; a duplicate alias aborts the whole edit. A request that leaves
/// every field at its current value reports `NoOp` without touching disk.
pub fn edit(
    store: &RecordStore,
    specifier: &str,
    request: &EditRequest,
) -> LifecycleResult<EditOutcome> {
    let mut records = store.load()?;
    let index = resolver::resolve_index(specifier, &records)?;
    let current = records
        .get(index)
        .ok_or_else(|| ResolveError::NotFound {
            specifier: specifier.to_string(),
        })?
        .clone();

    let command = match &request.command {
        Some(text) => {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() {
                return Err(LifecycleError::EmptyCommand);
            }
            trimmed
        }
        None => current.command.clone(),
    };
    let alias = match &request.alias {
        FieldEdit::Keep => current.alias.clone(),
        edit => normalize_alias(edit.apply(None).as_deref(), &records, Some(current.id))?,
    };
    let comment = match &request.comment {
        FieldEdit::Keep => current.comment.clone(),
        edit => normalize_text(edit.apply(None).as_deref()),
    };

    let updated = CommandRecord {
        id: current.id,
        alias,
        command,
        comment,
    };
    if updated == current {
        log::debug!("edit of record #{} changed nothing", current.id);
        return Ok(EditOutcome::NoOp);
    }

    if let Some(slot) = records.get_mut(index) {
        *slot = updated.clone();
    }
    store.save(&records)?;
    Ok(EditOutcome::Updated(updated))
}

/// Removes the record named by `specifier` and persists the shrunken set.
/// Confirmation of the deletion is the caller's job.
pub fn delete(store: &RecordStore, specifier: &str) -> LifecycleResult<CommandRecord> {
    let mut records = store.load()?;
    let index = resolver::resolve_index(specifier, &records)?;
    let removed = records.remove(index);
    log::debug!("deleting record #{}: {}", removed.id, removed.command);
    store.save(&records)?;
    Ok(removed)
}

/// The full record set, ordered ascending by id.
pub fn list(store: &RecordStore) -> LifecycleResult<Vec<CommandRecord>> {
    let mut records = store.load()?;
    records.sort_by_key(|record| record.id);
    Ok(records)
}

/// Records whose command, alias or comment contains `query`,
/// case-insensitively, ordered ascending by id.
pub fn find(store: &RecordStore, query: &str) -> LifecycleResult<Vec<CommandRecord>> {
    let needle = query.to_lowercase();
    let mut matches: Vec<CommandRecord> = store
        .load()?
        .into_iter()
        .filter(|record| {
            record.command.to_lowercase().contains(&needle)
                || record
                    .alias
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle))
                || record
                    .comment
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect();
    matches.sort_by_key(|record| record.id);
    Ok(matches)
}

/// Splits a power-syntax expression (`alias:command ...`) into its parts.
///
/// The text before the first ':' names the alias only when it is a valid
/// alias token and something follows it; otherwise the whole expression is
/// the command, so command lines that merely contain a colon still work.
pub fn parse_power_syntax(expression: &str) -> (Option<String>, String) {
    if let Some((head, tail)) = expression.split_once(':') {
        let head = head.trim();
        let tail = tail.trim();
        if resolver::is_valid_alias(head) && !tail.is_empty() {
            return (Some(head.to_string()), tail.to_string());
        }
    }
    (None, expression.trim().to_string())
}

/// Trims an alias candidate and checks syntax plus store-wide uniqueness.
/// A blank candidate means "no alias".
fn normalize_alias(
    candidate: Option<&str>,
    records: &[CommandRecord],
    exclude_id: Option<u64>,
) -> LifecycleResult<Option<String>> {
    let Some(alias) = candidate.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(None);
    };
    if !resolver::is_valid_alias(alias) {
        return Err(LifecycleError::MalformedAlias {
            alias: alias.to_string(),
        });
    }
    if let Some(taken_by) = resolver::alias_owner(alias, records, exclude_id) {
        return Err(LifecycleError::DuplicateAlias {
            alias: alias.to_string(),
            taken_by,
        });
    }
    Ok(Some(alias.to_string()))
}

fn normalize_text(candidate: Option<&str>) -> Option<String> {
    candidate
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::StorePaths;
    use std::fs;
    use std::path::Path;

    fn store_in(dir: &Path) -> RecordStore {
        RecordStore::new(StorePaths::at(dir.to_path_buf()).unwrap())
    }

    fn draft(command: &str, alias: Option<&str>, comment: Option<&str>) -> RecordDraft {
        RecordDraft {
            command: command.to_string(),
            alias: alias.map(str::to_string),
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn created_record_resolves_by_id_and_by_alias() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let record = create(&store, draft("git status", Some("gs"), None)).unwrap();

        let records = store.load().unwrap();
        assert_eq!(resolver::resolve("1", &records).unwrap(), &record);
        assert_eq!(resolver::resolve("gs", &records).unwrap(), &record);
    }

    #[test]
    fn create_rejects_an_empty_command() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(matches!(
            create(&store, draft("   ", None, None)),
            Err(LifecycleError::EmptyCommand)
        ));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn create_rejects_a_duplicate_alias_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), None)).unwrap();

        let err = create(&store, draft("git stash", Some("GS"), None)).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::DuplicateAlias { taken_by: 1, .. }
        ));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn create_rejects_a_malformed_alias() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(matches!(
            create(&store, draft("ls", Some("bad alias"), None)),
            Err(LifecycleError::MalformedAlias { .. })
        ));
    }

    #[test]
    fn ids_are_never_reused_after_a_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("first", None, None)).unwrap();
        create(&store, draft("second", None, None)).unwrap();
        delete(&store, "2").unwrap();

        let third = create(&store, draft("third", None, None)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn all_keep_edit_is_a_noop_and_does_not_rewrite_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), Some("note"))).unwrap();
        let before = fs::read_to_string(dir.path().join("commands.json")).unwrap();

        let outcome = edit(&store, "gs", &EditRequest::default()).unwrap();

        assert_eq!(outcome, EditOutcome::NoOp);
        let after = fs::read_to_string(dir.path().join("commands.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn setting_a_field_back_to_its_current_value_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), None)).unwrap();

        let request = EditRequest {
            command: Some("git status".to_string()),
            alias: FieldEdit::Set("gs".to_string()),
            comment: FieldEdit::Keep,
        };
        assert_eq!(edit(&store, "1", &request).unwrap(), EditOutcome::NoOp);
    }

    #[test]
    fn edit_can_clear_alias_and_comment_but_keeps_the_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), Some("note"))).unwrap();

        let request = EditRequest {
            command: None,
            alias: FieldEdit::Clear,
            comment: FieldEdit::Clear,
        };
        let EditOutcome::Updated(updated) = edit(&store, "gs", &request).unwrap() else {
            panic!("expected an update");
        };
        assert_eq!(updated.id, 1);
        assert_eq!(updated.alias, None);
        assert_eq!(updated.comment, None);
        assert_eq!(updated.command, "git status");
    }

    #[test]
    fn edit_keeps_its_own_alias_without_a_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), None)).unwrap();

        let request = EditRequest {
            command: Some("git status -sb".to_string()),
            alias: FieldEdit::Set("gs".to_string()),
            comment: FieldEdit::Keep,
        };
        assert!(matches!(
            edit(&store, "gs", &request).unwrap(),
            EditOutcome::Updated(_)
        ));
    }

    #[test]
    fn edit_alias_conflict_aborts_without_a_partial_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), None)).unwrap();
        create(&store, draft("git log", Some("gl"), None)).unwrap();
        let before = fs::read_to_string(dir.path().join("commands.json")).unwrap();

        let request = EditRequest {
            command: Some("git log --oneline".to_string()),
            alias: FieldEdit::Set("gs".to_string()),
            comment: FieldEdit::Keep,
        };
        assert!(matches!(
            edit(&store, "gl", &request),
            Err(LifecycleError::DuplicateAlias { .. })
        ));

        let after = fs::read_to_string(dir.path().join("commands.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn deleting_an_unknown_specifier_leaves_the_file_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), None)).unwrap();
        let before = fs::read_to_string(dir.path().join("commands.json")).unwrap();

        assert!(matches!(
            delete(&store, "zzz"),
            Err(LifecycleError::Resolve(ResolveError::NotFound { .. }))
        ));

        let after = fs::read_to_string(dir.path().join("commands.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn find_matches_command_alias_and_comment_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        create(&store, draft("git status", Some("gs"), None)).unwrap();
        create(&store, draft("cargo build", None, Some("Rust Build"))).unwrap();
        create(&store, draft("ls -la", None, None)).unwrap();

        assert_eq!(find(&store, "GIT").unwrap().len(), 1);
        assert_eq!(find(&store, "build").unwrap().len(), 1);
        assert_eq!(find(&store, "gs").unwrap().len(), 1);
        assert!(find(&store, "docker").unwrap().is_empty());
    }

    #[test]
    fn power_syntax_splits_alias_from_command() {
        assert_eq!(
            parse_power_syntax("gs:git status"),
            (Some("gs".to_string()), "git status".to_string())
        );
    }

    #[test]
    fn power_syntax_without_a_valid_alias_head_is_all_command() {
        assert_eq!(
            parse_power_syntax("git log --pretty=format:%h"),
            (None, "git log --pretty=format:%h".to_string())
        );
        assert_eq!(
            parse_power_syntax("echo hello"),
            (None, "echo hello".to_string())
        );
        assert_eq!(parse_power_syntax(":ls"), (None, ":ls".to_string()));
    }
}
