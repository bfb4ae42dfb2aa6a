// src/constants.rs

/// The name of the per-user state directory (inside the system config dir).
pub const APP_DIR: &str = "cmdstash";

/// The name of the records file (a JSON array of command records).
pub const RECORDS_FILENAME: &str = "commands.json";

/// The name of the counter file holding the next record id.
pub const COUNTER_FILENAME: &str = "counter.json";

/// The placeholder marker replaced by runtime arguments at invocation time.
pub const PLACEHOLDER: &str = "{}";

/// Filename prefix for timestamped export files.
pub const EXPORT_FILE_PREFIX: &str = "cmdstash-export-";
