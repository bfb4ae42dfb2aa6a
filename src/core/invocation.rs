// src/core/invocation.rs

use crate::constants::PLACEHOLDER;
use crate::models::CommandRecord;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvocationError {
    #[error("This command has {required} placeholder(s) but only {provided} argument(s) were given.")]
    InsufficientArguments { required: usize, provided: usize },
}

/// The final, literal command line plus anything worth warning about.
/// Execution itself is the executor's job, after the user confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPlan {
    pub command_line: String,
    /// Runtime arguments that had no placeholder to land in. Ignoring them
    /// is a warning, not an error.
    pub unused_args: Vec<String>,
}

/// Substitutes runtime arguments into the record's `{}` placeholders and
/// expands a leading `~`, producing the command line to hand to the shell.
///
/// Placeholders are filled left-to-right with exactly the first N arguments.
/// Too few arguments is a hard error and nothing may be executed; extra
/// arguments are collected into `unused_args`. With zero placeholders the
/// command passes through unmodified and every argument is "unused".
pub fn prepare(
    record: &CommandRecord,
    runtime_args: &[String],
) -> Result<InvocationPlan, InvocationError> {
    let slots = record.command.matches(PLACEHOLDER).count();
    if runtime_args.len() < slots {
        return Err(InvocationError::InsufficientArguments {
            required: slots,
            provided: runtime_args.len(),
        });
    }

    // Single pass over the split pieces, so an argument that itself contains
    // "{}" is never re-substituted.
    let mut filled = String::with_capacity(record.command.len());
    let mut args = runtime_args.iter();
    for (i, piece) in record.command.split(PLACEHOLDER).enumerate() {
        if i > 0
            && let Some(arg) = args.next()
        {
            filled.push_str(arg);
        }
        filled.push_str(piece);
    }

    // `~` expands only at the start of the line and only as a whole path
    // segment ("~" or "~/..."); "a~b" stays untouched.
    let command_line = shellexpand::tilde(&filled).into_owned();

    Ok(InvocationPlan {
        command_line,
        unused_args: runtime_args.get(slots..).unwrap_or_default().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(command: &str) -> CommandRecord {
        CommandRecord {
            id: 1,
            alias: None,
            command: command.to_string(),
            comment: None,
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn substitutes_left_to_right_and_reports_extras() {
        let plan = prepare(&record("echo {} {}"), &args(&["a", "b", "c"])).unwrap();
        assert_eq!(plan.command_line, "echo a b");
        assert_eq!(plan.unused_args, vec!["c".to_string()]);
    }

    #[test]
    fn too_few_arguments_is_a_hard_error() {
        assert_eq!(
            prepare(&record("echo {} {}"), &args(&["a"])),
            Err(InvocationError::InsufficientArguments {
                required: 2,
                provided: 1
            })
        );
    }

    #[test]
    fn zero_placeholders_passes_through_and_flags_every_argument() {
        let plan = prepare(&record("git status"), &args(&["a", "b"])).unwrap();
        assert_eq!(plan.command_line, "git status");
        assert_eq!(plan.unused_args, args(&["a", "b"]));
    }

    #[test]
    fn no_placeholders_and_no_arguments_is_the_plain_command() {
        let plan = prepare(&record("git status"), &[]).unwrap();
        assert_eq!(plan.command_line, "git status");
        assert!(plan.unused_args.is_empty());
    }

    #[test]
    fn an_argument_containing_the_marker_is_not_resubstituted() {
        let plan = prepare(&record("echo {} {}"), &args(&["{}", "b"])).unwrap();
        assert_eq!(plan.command_line, "echo {} b");
        assert!(plan.unused_args.is_empty());
    }

    #[test]
    fn leading_tilde_expands_to_the_home_directory() {
        let home = dirs::home_dir().unwrap();
        let plan = prepare(&record("~/bin/tool"), &[]).unwrap();
        assert_eq!(
            plan.command_line,
            format!("{}/bin/tool", home.to_string_lossy())
        );
    }

    #[test]
    fn embedded_tilde_is_left_alone() {
        let plan = prepare(&record("echo a~b"), &[]).unwrap();
        assert_eq!(plan.command_line, "echo a~b");
    }

    #[test]
    fn placeholder_substitution_happens_before_tilde_expansion() {
        let home = dirs::home_dir().unwrap();
        let plan = prepare(&record("~/{}"), &args(&["notes.txt"])).unwrap();
        assert_eq!(
            plan.command_line,
            format!("{}/notes.txt", home.to_string_lossy())
        );
    }
}
