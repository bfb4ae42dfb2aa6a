// src/cli/handlers/raw.rs

use anyhow::Result;
use colored::Colorize;

use crate::core::{
    paths::StorePaths,
    store::{RecordStore, StoreError},
};

pub fn handle(paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());
    match store.dump_raw() {
        Ok(raw) => {
            print!("{}", raw);
            if !raw.ends_with('\n') {
                println!();
            }
            Ok(0)
        }
        Err(StoreError::MissingRecordsFile { .. }) => {
            println!("{}", "No records file yet; the store is empty.".dimmed());
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}
