// src/cli/handlers/delete.rs

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::handlers::commons,
    core::{lifecycle, paths::StorePaths, resolver, store::RecordStore},
};

pub fn handle(specifier: &str, yes: bool, paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());

    if !yes {
        // Show what is about to disappear before asking.
        let records = store.load()?;
        let record = resolver::resolve(specifier, &records)?;
        println!("{}", "This will permanently delete:".red().bold());
        commons::print_record_details(record);

        if !commons::confirm("Delete this command?", false)? {
            commons::print_cancelled();
            return Ok(0);
        }
    }

    let removed = lifecycle::delete(&store, specifier)?;
    println!(
        "{} Deleted {}.",
        "✔".green().bold(),
        format!("#{}", removed.id).green()
    );
    Ok(0)
}
