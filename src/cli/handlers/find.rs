// src/cli/handlers/find.rs

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::handlers::commons,
    core::{lifecycle, paths::StorePaths, store::RecordStore},
};

pub fn handle(query: &str, paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());
    let matches = lifecycle::find(&store, query)?;

    if matches.is_empty() {
        println!("No saved command matches '{}'.", query.bold());
        return Ok(0);
    }

    for record in &matches {
        commons::print_record_line(record);
    }
    Ok(0)
}
