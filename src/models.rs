// src/models.rs

use serde::{Deserialize, Serialize};

// --- PERSISTED MODELS ---
// These mirror the on-disk JSON shape of the original records file, where
// `false` is the "no value" sentinel for optional text fields. In memory the
// absence is an `Option`; "present but empty" is rejected at the boundary.

/// A single bookmarked command line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    /// Positive, unique, assigned once at creation. Never reused or changed.
    pub id: u64,
    /// Optional short token, unique across the store (case-insensitive).
    /// Must not contain whitespace or ':' characters.
    #[serde(default, with = "opt_sentinel")]
    pub alias: Option<String>,
    /// The shell command line. May contain `{}` placeholder markers.
    pub command: String,
    /// Optional free-text annotation.
    #[serde(default, with = "opt_sentinel")]
    pub comment: Option<String>,
}

/// The persisted id counter, kept in its own file next to the records.
/// Always greater than the highest id currently in the store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounter {
    #[serde(rename = "nextId")]
    pub next_id: u64,
}

impl Default for StoreCounter {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

// --- IN-MEMORY MODELS (never written to disk directly) ---

/// The validated-to-be field values of a record about to be created.
/// The id is minted by the store at commit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub command: String,
    pub alias: Option<String>,
    pub comment: Option<String>,
}

/// A three-state edit instruction for an optional field. Derived from an
/// explicit user choice, never from whitespace sniffing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldEdit {
    /// Leave the current value untouched.
    #[default]
    Keep,
    /// Replace the current value.
    Set(String),
    /// Remove the current value.
    Clear,
}

impl FieldEdit {
    /// Applies the instruction to a current value, returning the new one.
    pub fn apply(&self, current: Option<&str>) -> Option<String> {
        match self {
            Self::Keep => current.map(str::to_string),
            Self::Set(value) => Some(value.clone()),
            Self::Clear => None,
        }
    }
}

/// Everything an edit operation may change about a record. The id is
/// immutable, and the command can be replaced but never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub command: Option<String>,
    pub alias: FieldEdit,
    pub comment: FieldEdit,
}

impl EditRequest {
    /// True when the request carries no instruction at all.
    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.alias == FieldEdit::Keep && self.comment == FieldEdit::Keep
    }
}

// --- WIRE HELPERS ---

/// Serde adapter for the `string | false` sentinel used by the records file.
/// `false`, `null`, a missing key, or a blank string all decode to `None`;
/// `None` always encodes back as `false`.
pub(crate) mod opt_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Text(String),
        Flag(bool),
    }

    pub(crate) fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_bool(false),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Wire>::deserialize(deserializer)? {
            Some(Wire::Text(text)) if !text.trim().is_empty() => Ok(Some(text)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_false_sentinels_as_absent() {
        let raw = r#"{ "id": 3, "alias": false, "command": "git status", "comment": false }"#;
        let record: CommandRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.alias, None);
        assert_eq!(record.command, "git status");
        assert_eq!(record.comment, None);
    }

    #[test]
    fn record_encodes_absent_fields_as_false() {
        let record = CommandRecord {
            id: 1,
            alias: None,
            command: "ls -la".to_string(),
            comment: None,
        };
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["alias"], serde_json::Value::Bool(false));
        assert_eq!(json["comment"], serde_json::Value::Bool(false));
    }

    #[test]
    fn record_round_trips_present_fields() {
        let record = CommandRecord {
            id: 9,
            alias: Some("gs".to_string()),
            command: "git status".to_string(),
            comment: Some("quick tree check".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: CommandRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn blank_or_missing_optional_fields_decode_as_absent() {
        let raw = r#"{ "id": 2, "alias": "   ", "command": "pwd" }"#;
        let record: CommandRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.alias, None);
        assert_eq!(record.comment, None);
    }

    #[test]
    fn counter_uses_the_legacy_key_name() {
        let counter: StoreCounter = serde_json::from_str(r#"{ "nextId": 41 }"#).unwrap();
        assert_eq!(counter.next_id, 41);
        let json = serde_json::to_string(&StoreCounter { next_id: 7 }).unwrap();
        assert_eq!(json, r#"{"nextId":7}"#);
    }

    #[test]
    fn field_edit_applies_all_three_states() {
        assert_eq!(FieldEdit::Keep.apply(Some("old")), Some("old".to_string()));
        assert_eq!(
            FieldEdit::Set("new".to_string()).apply(Some("old")),
            Some("new".to_string())
        );
        assert_eq!(FieldEdit::Clear.apply(Some("old")), None);
        assert_eq!(FieldEdit::Keep.apply(None), None);
    }
}
