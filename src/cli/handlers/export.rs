// src/cli/handlers/export.rs

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::core::{paths::StorePaths, store::RecordStore, transfer};

pub fn handle(target_dir: &Path, paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());
    let written = transfer::export(&store, target_dir)?;
    println!(
        "{} Exported to '{}'.",
        "✔".green().bold(),
        written.display()
    );
    Ok(0)
}
