// src/cli/handlers/run.rs

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::handlers::commons,
    core::{invocation, paths::StorePaths, resolver, store::RecordStore},
    system::executor,
};

/// Resolves, substitutes, confirms and executes. The returned code is the
/// child's own exit status, propagated verbatim so callers can tell "it ran
/// and failed" apart from "we never ran it" (which surfaces as an error).
pub fn handle(specifier: &str, args: &[String], yes: bool, paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());
    let records = store.load()?;
    let record = resolver::resolve(specifier, &records)?;

    let plan = invocation::prepare(record, args)?;
    if !plan.unused_args.is_empty() {
        println!(
            "{} ignoring extra argument(s): {}",
            "Warning:".yellow().bold(),
            plan.unused_args.join(", ")
        );
    }

    println!("{} {}", "→".cyan().bold(), plan.command_line.bold());
    if !yes && !commons::confirm("Run this command?", true)? {
        return Err(commons::RunCancelled.into());
    }

    let code = executor::execute(&plan.command_line)?;
    if code != 0 {
        println!(
            "{}",
            format!("Command exited with status {}.", code).yellow()
        );
    }
    Ok(code)
}
