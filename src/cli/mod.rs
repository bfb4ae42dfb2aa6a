// src/cli/mod.rs

pub mod handlers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmdstash: bookmark shell commands and run them again later.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Save a new command, interactively or with power syntax.
    #[command(visible_alias = "new")]
    Add {
        /// Power-syntax expression: "[alias:]command text". Omit to be prompted.
        expression: Option<String>,
        /// Attach a comment without being prompted for one.
        #[arg(long, short = 'm')]
        comment: Option<String>,
    },

    /// List every saved command.
    #[command(visible_alias = "ls")]
    List,

    /// Search saved commands by text (matches command, alias and comment).
    Find {
        query: String,
    },

    /// Edit a saved command's text, alias or comment.
    Edit {
        /// The id or alias of the record to edit.
        specifier: String,
        /// New command text.
        #[arg(long)]
        command: Option<String>,
        /// New alias.
        #[arg(long, conflicts_with = "clear_alias")]
        alias: Option<String>,
        /// Remove the current alias.
        #[arg(long)]
        clear_alias: bool,
        /// New comment.
        #[arg(long, short = 'm', conflicts_with = "clear_comment")]
        comment: Option<String>,
        /// Remove the current comment.
        #[arg(long)]
        clear_comment: bool,
    },

    /// Delete a saved command.
    #[command(visible_alias = "del")]
    Delete {
        /// The id or alias of the record to delete.
        specifier: String,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Run a saved command, substituting {} placeholders with ARGS.
    Run {
        /// The id or alias of the record to run.
        specifier: String,
        /// Runtime arguments substituted into {} placeholders, left to right.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export all records to a timestamped JSON file in a directory.
    Export {
        /// An existing directory to write the export file into.
        target_dir: PathBuf,
    },

    /// Import records from a portable JSON array (appends by default).
    Import {
        /// The JSON file to import.
        path: PathBuf,
        /// Discard the current records and replace them with the imported set.
        #[arg(long)]
        replace: bool,
        /// Skip the confirmation prompt for --replace.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the records file verbatim.
    Raw,
}
