//! Parsing of shell input lines.
//!
//! A line starting with `:` is a command; anything else is text typed into
//! the input box and submitted. Text that itself starts with `:` is entered
//! with `::` or `:add`.

use crate::types::{TaskId, TaskListAction};
use thiserror::Error;

/// Errors for input lines that cannot be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The `:name` is not a known command
    #[error("unknown command ':{0}' (try :help)")]
    UnknownCommand(String),

    /// A command that needs a task id was given none
    #[error(":{0} needs a task id")]
    MissingId(String),

    /// A command that needs task text was given none
    #[error(":{0} needs some text")]
    MissingText(String),

    /// The task id is not a non-negative integer
    #[error("'{0}' is not a task id")]
    InvalidId(String),
}

/// One line of shell input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Type `text` into the input box and submit it
    Enter(String),
    /// Type `text` into the input box without submitting
    Type(String),
    /// Submit whatever is already in the input box
    Submit,
    /// Flip a task between done and not done
    Toggle(TaskId),
    /// Delete a task
    Remove(TaskId),
    /// Show usage
    Help,
    /// Leave the shell
    Quit,
}

impl Command {
    /// Parses one input line (without its trailing newline)
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for an unknown `:command` or a missing or
    /// malformed task id.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            if line.trim().is_empty() {
                return Ok(Self::Submit);
            }
            return Ok(Self::Enter(line.to_string()));
        };

        if rest.starts_with(':') {
            return Ok(Self::Enter(rest.to_string()));
        }

        let rest = rest.trim_start();
        let (name, arg) = rest
            .split_once(char::is_whitespace)
            .unwrap_or((rest, ""));
        let id = |name: &str| -> Result<TaskId, CommandError> {
            let arg = arg
                .split_whitespace()
                .next()
                .ok_or_else(|| CommandError::MissingId(name.to_string()))?;
            arg.parse::<TaskId>()
                .map_err(|_| CommandError::InvalidId(arg.to_string()))
        };

        match name {
            "add" | "a" if arg.trim().is_empty() => {
                Err(CommandError::MissingText(name.to_string()))
            },
            "add" | "a" => Ok(Self::Enter(arg.to_string())),
            "type" => Ok(Self::Type(arg.to_string())),
            "toggle" | "t" => id(name).map(Self::Toggle),
            "remove" | "rm" | "delete" => id(name).map(Self::Remove),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Store actions this command dispatches, in order
    ///
    /// `Help` and `Quit` only affect the shell and dispatch nothing.
    #[must_use]
    pub fn into_actions(self) -> Vec<TaskListAction> {
        match self {
            Self::Enter(text) => vec![TaskListAction::InputChanged { text }, TaskListAction::Submit],
            Self::Type(text) => vec![TaskListAction::InputChanged { text }],
            Self::Submit => vec![TaskListAction::Submit],
            Self::Toggle(id) => vec![TaskListAction::Toggle { id }],
            Self::Remove(id) => vec![TaskListAction::Remove { id }],
            Self::Help | Self::Quit => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_entered_verbatim() {
        assert_eq!(
            Command::parse("  Buy milk "),
            Ok(Command::Enter("  Buy milk ".to_string()))
        );
    }

    #[test]
    fn blank_line_submits() {
        assert_eq!(Command::parse(""), Ok(Command::Submit));
        assert_eq!(Command::parse("   "), Ok(Command::Submit));
    }

    #[test]
    fn toggle_and_remove_take_ids() {
        assert_eq!(Command::parse(":toggle 3"), Ok(Command::Toggle(TaskId::new(3))));
        assert_eq!(Command::parse(":t 3"), Ok(Command::Toggle(TaskId::new(3))));
        assert_eq!(Command::parse(" :rm  12 "), Ok(Command::Remove(TaskId::new(12))));
        assert_eq!(Command::parse(":delete 1"), Ok(Command::Remove(TaskId::new(1))));
    }

    #[test]
    fn colon_leading_text_can_be_entered() {
        assert_eq!(
            Command::parse("::) call mum"),
            Ok(Command::Enter(":) call mum".to_string()))
        );
        assert_eq!(
            Command::parse(":add :) call mum"),
            Ok(Command::Enter(":) call mum".to_string()))
        );
        assert_eq!(
            Command::parse(":a   Buy milk"),
            Ok(Command::Enter("  Buy milk".to_string()))
        );
        assert_eq!(
            Command::parse(":add  "),
            Err(CommandError::MissingText("add".to_string()))
        );
    }

    #[test]
    fn type_fills_input_without_submitting() {
        assert_eq!(Command::parse(":type Buy milk"), Ok(Command::Type("Buy milk".to_string())));
        assert_eq!(Command::parse(":type"), Ok(Command::Type(String::new())));
        assert_eq!(
            Command::Type("Buy milk".to_string()).into_actions(),
            vec![TaskListAction::InputChanged {
                text: "Buy milk".to_string()
            }]
        );
    }

    #[test]
    fn shell_commands() {
        assert_eq!(Command::parse(":help"), Ok(Command::Help));
        assert_eq!(Command::parse(":q"), Ok(Command::Quit));
        assert_eq!(Command::parse(":quit"), Ok(Command::Quit));
    }

    #[test]
    fn malformed_commands_are_rejected() {
        assert_eq!(
            Command::parse(":toggle"),
            Err(CommandError::MissingId("toggle".to_string()))
        );
        assert_eq!(
            Command::parse(":rm one"),
            Err(CommandError::InvalidId("one".to_string()))
        );
        assert_eq!(
            Command::parse(":t -1"),
            Err(CommandError::InvalidId("-1".to_string()))
        );
        assert_eq!(
            Command::parse(":edit 1"),
            Err(CommandError::UnknownCommand("edit".to_string()))
        );
        assert_eq!(Command::parse(":"), Err(CommandError::UnknownCommand(String::new())));
    }

    #[test]
    fn enter_types_then_submits() {
        assert_eq!(
            Command::Enter("Buy milk".to_string()).into_actions(),
            vec![
                TaskListAction::InputChanged {
                    text: "Buy milk".to_string()
                },
                TaskListAction::Submit,
            ]
        );
        assert!(Command::Quit.into_actions().is_empty());
    }
}
