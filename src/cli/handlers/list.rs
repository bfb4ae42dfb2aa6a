// src/cli/handlers/list.rs

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::handlers::commons,
    core::{lifecycle, paths::StorePaths, store::RecordStore},
};

pub fn handle(paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());
    let records = lifecycle::list(&store)?;

    if records.is_empty() {
        println!(
            "No commands saved yet. Add one with {}.",
            "cmdstash add".cyan()
        );
        return Ok(0);
    }

    for record in &records {
        commons::print_record_line(record);
    }
    println!(
        "\n{}",
        format!("{} command(s) saved.", records.len()).dimmed()
    );
    Ok(0)
}
