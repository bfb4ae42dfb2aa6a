// src/cli/handlers/edit.rs

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::{
    cli::handlers::commons,
    core::{
        lifecycle::{self, EditOutcome},
        paths::StorePaths,
        resolver,
        store::RecordStore,
    },
    models::{CommandRecord, EditRequest, FieldEdit},
};

/// The non-interactive edit switches, straight from the CLI.
#[derive(Debug, Default)]
pub struct EditFlags {
    pub command: Option<String>,
    pub alias: Option<String>,
    pub clear_alias: bool,
    pub comment: Option<String>,
    pub clear_comment: bool,
}

impl EditFlags {
    fn is_empty(&self) -> bool {
        self.command.is_none()
            && self.alias.is_none()
            && !self.clear_alias
            && self.comment.is_none()
            && !self.clear_comment
    }

    fn into_request(self) -> EditRequest {
        EditRequest {
            command: self.command,
            alias: if self.clear_alias {
                FieldEdit::Clear
            } else {
                self.alias.map_or(FieldEdit::Keep, FieldEdit::Set)
            },
            comment: if self.clear_comment {
                FieldEdit::Clear
            } else {
                self.comment.map_or(FieldEdit::Keep, FieldEdit::Set)
            },
        }
    }
}

pub fn handle(specifier: &str, flags: EditFlags, paths: &StorePaths) -> Result<i32> {
    let store = RecordStore::new(paths.clone());

    let request = if flags.is_empty() {
        // No switches given: fall back to the interactive three-state prompts.
        let records = store.load()?;
        let current = resolver::resolve(specifier, &records)?.clone();
        println!("Editing:");
        commons::print_record_details(&current);
        prompt_for_request(&current)?
    } else {
        flags.into_request()
    };

    if request.is_empty() {
        println!("{}", "Nothing changed.".dimmed());
        return Ok(0);
    }

    match lifecycle::edit(&store, specifier, &request)? {
        EditOutcome::Updated(record) => {
            println!("{} Updated:", "✔".green().bold());
            commons::print_record_details(&record);
        }
        EditOutcome::NoOp => println!("{}", "Nothing changed.".dimmed()),
    }
    Ok(0)
}

/// Builds the edit request from explicit user choices. The command answer
/// uses "empty keeps current"; alias and comment get a real three-way
/// choice, so clearing never depends on magic whitespace.
fn prompt_for_request(current: &CommandRecord) -> Result<EditRequest> {
    let theme = ColorfulTheme::default();

    let command: String = Input::with_theme(&theme)
        .with_prompt("New command (empty keeps current)")
        .allow_empty(true)
        .interact_text()?;

    Ok(EditRequest {
        command: if command.trim().is_empty() {
            None
        } else {
            Some(command)
        },
        alias: prompt_field_edit(&theme, "alias", current.alias.as_deref())?,
        comment: prompt_field_edit(&theme, "comment", current.comment.as_deref())?,
    })
}

fn prompt_field_edit(
    theme: &ColorfulTheme,
    field: &str,
    current: Option<&str>,
) -> Result<FieldEdit> {
    let shown = current.unwrap_or("(none)");
    let choice = Select::with_theme(theme)
        .with_prompt(format!("{} [{}]", field, shown))
        .items(&["Keep", "Change", "Clear"])
        .default(0)
        .interact()?;

    Ok(match choice {
        1 => {
            let value: String = Input::with_theme(theme)
                .with_prompt(format!("New {}", field))
                .interact_text()?;
            FieldEdit::Set(value)
        }
        2 => FieldEdit::Clear,
        _ => FieldEdit::Keep,
    })
}
