//! Errors surfaced to the command line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },

    #[error("'{command}' needs at least one argument")]
    MissingOperand { command: &'static str },

    #[error("'{command}' takes no arguments, got '{arg}'")]
    UnexpectedOperand { command: &'static str, arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
