// src/cli/handlers/add.rs

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::{
    cli::handlers::commons,
    core::{lifecycle, paths::StorePaths, store::RecordStore},
    models::RecordDraft,
};

pub fn handle(
    expression: Option<String>,
    comment: Option<String>,
    paths: &StorePaths,
) -> Result<i32> {
    let store = RecordStore::new(paths.clone());

    let draft = match expression {
        Some(expression) => {
            let (alias, command) = lifecycle::parse_power_syntax(&expression);
            RecordDraft {
                command,
                alias,
                comment,
            }
        }
        None => match prompt_for_draft(comment)? {
            Some(draft) => draft,
            None => {
                commons::print_cancelled();
                return Ok(0);
            }
        },
    };

    let record = lifecycle::create(&store, draft)?;
    println!("{} Saved:", "✔".green().bold());
    commons::print_record_details(&record);
    Ok(0)
}

/// Collects the draft interactively. An empty command answer cancels the
/// whole operation; empty alias/comment answers just mean "none".
fn prompt_for_draft(preset_comment: Option<String>) -> Result<Option<RecordDraft>> {
    let theme = ColorfulTheme::default();

    let command: String = Input::with_theme(&theme)
        .with_prompt("Command to save (empty cancels)")
        .allow_empty(true)
        .interact_text()?;
    if command.trim().is_empty() {
        return Ok(None);
    }

    let alias: String = Input::with_theme(&theme)
        .with_prompt("Alias (optional)")
        .allow_empty(true)
        .interact_text()?;

    let comment = match preset_comment {
        Some(comment) => Some(comment),
        None => {
            let text: String = Input::with_theme(&theme)
                .with_prompt("Comment (optional)")
                .allow_empty(true)
                .interact_text()?;
            if text.trim().is_empty() { None } else { Some(text) }
        }
    };

    Ok(Some(RecordDraft {
        command,
        alias: if alias.trim().is_empty() {
            None
        } else {
            Some(alias)
        },
        comment,
    }))
}
