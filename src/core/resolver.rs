// src/core/resolver.rs

use crate::models::CommandRecord;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No saved command matches '{specifier}'. Pass an id or an alias.")]
    NotFound { specifier: String },
}

type ResolveResult<T> = Result<T, ResolveError>;

/// Locates a record by user-supplied specifier: its numeric id or its alias.
///
/// The record sequence is scanned once. At each element the id is compared
/// against the base-10 form of the specifier first, then the alias
/// case-insensitively; the first record matched by either criterion wins.
/// There is deliberately no second "ids beat aliases" pass, preserving the
/// scan-order semantics of the original tool.
pub fn resolve<'a>(
    specifier: &str,
    records: &'a [CommandRecord],
) -> ResolveResult<&'a CommandRecord> {
    let index = resolve_index(specifier, records)?;
    records.get(index).ok_or_else(|| ResolveError::NotFound {
        specifier: specifier.trim().to_string(),
    })
}

/// Same scan as `resolve`, but returns the position. Used by mutating
/// operations that need to edit or remove the record in place.
pub fn resolve_index(specifier: &str, records: &[CommandRecord]) -> ResolveResult<usize> {
    let wanted = specifier.trim();
    let numeric: Option<u64> = wanted.parse().ok();
    records
        .iter()
        .position(|record| {
            numeric == Some(record.id)
                || record
                    .alias
                    .as_deref()
                    .is_some_and(|alias| alias.eq_ignore_ascii_case(wanted))
        })
        .ok_or_else(|| ResolveError::NotFound {
            specifier: wanted.to_string(),
        })
}

/// True when `alias` is a well-formed alias token: non-empty, no whitespace,
/// no ':' (the power-syntax separator).
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty() && !alias.contains(char::is_whitespace) && !alias.contains(':')
}

/// Returns the id of the record holding `alias` (case-insensitively),
/// ignoring the record `exclude_id` so edit-in-place never conflicts with
/// itself.
pub fn alias_owner(
    alias: &str,
    records: &[CommandRecord],
    exclude_id: Option<u64>,
) -> Option<u64> {
    records
        .iter()
        .filter(|record| Some(record.id) != exclude_id)
        .find(|record| {
            record
                .alias
                .as_deref()
                .is_some_and(|a| a.eq_ignore_ascii_case(alias))
        })
        .map(|record| record.id)
}

/// An absent alias never conflicts; otherwise true iff no other record
/// carries the same alias under case-insensitive comparison.
pub fn is_alias_unique(
    alias: Option<&str>,
    records: &[CommandRecord],
    exclude_id: Option<u64>,
) -> bool {
    match alias {
        None => true,
        Some(alias) if alias.trim().is_empty() => true,
        Some(alias) => alias_owner(alias, records, exclude_id).is_none(),
    }
}
