// src/cli/handlers/commons.rs

use crate::models::CommandRecord;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use thiserror::Error;

/// Typed marker for a user-cancelled `run`, so `main` can exit with the
/// interrupt code instead of printing an error banner.
#[derive(Error, Debug)]
#[error("Operation cancelled.")]
pub struct RunCancelled;

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

pub fn print_cancelled() {
    println!("{}", "Operation cancelled.".yellow());
}

/// One aligned line per record: id, alias, command, dimmed comment.
pub fn print_record_line(record: &CommandRecord) {
    let id = format!("#{}", record.id);
    let alias = record.alias.as_deref().unwrap_or("-");
    print!(
        "{}  {}  {}",
        format!("{:>5}", id).green().bold(),
        format!("{:<14}", alias).cyan(),
        record.command.bold()
    );
    if let Some(comment) = &record.comment {
        print!("  {}", format!("# {}", comment).dimmed());
    }
    println!();
}

/// The record rendered on its own, for add/edit/delete feedback.
pub fn print_record_details(record: &CommandRecord) {
    println!(
        "  {} {}",
        format!("#{}", record.id).green().bold(),
        record.command.bold()
    );
    if let Some(alias) = &record.alias {
        println!("  {} {}", "alias:".dimmed(), alias.cyan());
    }
    if let Some(comment) = &record.comment {
        println!("  {} {}", "comment:".dimmed(), comment);
    }
}
