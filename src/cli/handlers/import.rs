// src/cli/handlers/import.rs

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::{
    cli::handlers::commons,
    core::{
        paths::StorePaths,
        store::RecordStore,
        transfer::{self, ImportMode},
    },
};

pub fn handle(path: &Path, replace: bool, yes: bool, paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());

    let mode = if replace {
        if !yes
            && !commons::confirm(
                "Replace ALL existing records with the imported set? This cannot be undone.",
                false,
            )?
        {
            commons::print_cancelled();
            return Ok(0);
        }
        ImportMode::Replace
    } else {
        ImportMode::Append
    };

    let report = transfer::import(&store, path, mode)?;

    println!(
        "{} Imported {} record(s).",
        "✔".green().bold(),
        report.imported
    );
    if report.skipped_invalid > 0 {
        println!(
            "{} skipped {} entr(y/ies) without a usable 'command' field.",
            "Warning:".yellow().bold(),
            report.skipped_invalid
        );
    }
    for alias in &report.dropped_aliases {
        println!(
            "{} alias '{}' was already taken or malformed; its record was imported without one.",
            "Warning:".yellow().bold(),
            alias.cyan()
        );
    }
    Ok(0)
}
