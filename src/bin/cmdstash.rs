// src/bin/cmdstash.rs

use anyhow::Result;
use clap::Parser;
use cmdstash::{
    cli::{Action, Cli, handlers},
    core::paths::StorePaths,
};
use colored::Colorize;

/// Entry point: set up logging, resolve the state directory, dispatch, and
/// handle every error in one place.
fn main() {
    env_logger::init();

    // Failing to create the state directory is the one setup failure the
    // tool cannot recover from.
    let paths = match StorePaths::discover() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("{}: {}", "Fatal".red().bold(), e);
            std::process::exit(1);
        }
    };

    match dispatch(Cli::parse(), &paths) {
        // `run` propagates the child's own exit code here; every other
        // subcommand reports 0.
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if e.downcast_ref::<handlers::commons::RunCancelled>().is_some() {
                println!("\n{}", "Operation cancelled.".yellow());
                std::process::exit(130);
            }
            // Exit 2 for tool-side failures keeps "we never ran it"
            // distinguishable from a bookmarked command's own non-zero exit.
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn dispatch(cli: Cli, paths: &StorePaths) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);
    match cli.action {
        Action::Add {
            expression,
            comment,
        } => handlers::add::handle(expression, comment, paths),
        Action::List => handlers::list::handle(paths),
        Action::Find { query } => handlers::find::handle(&query, paths),
        Action::Edit {
            specifier,
            command,
            alias,
            clear_alias,
            comment,
            clear_comment,
        } => handlers::edit::handle(
            &specifier,
            handlers::edit::EditFlags {
                command,
                alias,
                clear_alias,
                comment,
                clear_comment,
            },
            paths,
        ),
        Action::Delete { specifier, yes } => handlers::delete::handle(&specifier, yes, paths),
        Action::Run {
            specifier,
            args,
            yes,
        } => handlers::run::handle(&specifier, &args, yes, paths),
        Action::Export { target_dir } => handlers::export::handle(&target_dir, paths),
        Action::Import { path, replace, yes } => {
            handlers::import::handle(&path, replace, yes, paths)
        }
        Action::Raw => handlers::raw::handle(paths),
    }
}
