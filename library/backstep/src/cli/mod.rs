//! Command parsing and execution.
//!
//! Every command builds a [`Reverse`] over its input and pulls from it, so
//! the output order is exactly the order the iterator produces.

use std::io::{BufRead, Write};

use backstep_iter::drive::{drain, take_up_to};
use backstep_iter::{PullIterator, Reverse};
use backstep_seq::Chars;

use crate::config::RunConfig;
use crate::error::CliError;

/// A reversing command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reverse the characters of the joined arguments.
    Chars,
    /// Reverse the order of the arguments.
    Words,
    /// Reverse the order of stdin lines.
    Lines,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "chars" => Some(Command::Chars),
            "words" => Some(Command::Words),
            "lines" => Some(Command::Lines),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Chars => "chars",
            Command::Words => "words",
            Command::Lines => "lines",
        }
    }

    fn default_separator(self) -> &'static str {
        match self {
            Command::Chars => "",
            Command::Words => " ",
            Command::Lines => "\n",
        }
    }
}

/// A fully parsed reversing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub operands: Vec<String>,
    pub config: RunConfig,
}

/// What the binary should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Reverse(Invocation),
}

/// Parse arguments (without the program name).
///
/// Flags may appear anywhere after the command. `--` ends flag parsing so
/// operands that start with `-` can be passed through.
pub fn parse_args(args: &[String]) -> Result<Action, CliError> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Action::Help);
    };

    let command = match first.as_str() {
        "help" | "--help" | "-h" => return Ok(Action::Help),
        "version" | "--version" | "-V" => return Ok(Action::Version),
        name => Command::parse(name).ok_or_else(|| CliError::UnknownCommand(name.to_string()))?,
    };

    let mut config = RunConfig::default();
    let mut operands = Vec::new();
    let mut flags_done = false;
    for arg in rest {
        if flags_done {
            operands.push(arg.clone());
        } else if arg == "--" {
            flags_done = true;
        } else if !config.apply_flag(arg)? {
            operands.push(arg.clone());
        }
    }

    match (command, operands.first()) {
        (Command::Chars | Command::Words, None) => {
            return Err(CliError::MissingOperand {
                command: command.name(),
            });
        }
        (Command::Lines, Some(arg)) => {
            return Err(CliError::UnexpectedOperand {
                command: command.name(),
                arg: arg.clone(),
            });
        }
        _ => {}
    }

    Ok(Action::Reverse(Invocation {
        command,
        operands,
        config,
    }))
}

/// Execute a reversing run, reading `input` if the command needs it and
/// writing one result line to `out`.
pub fn run<R: BufRead, W: Write>(
    invocation: &Invocation,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let config = &invocation.config;
    tracing::debug!(
        command = invocation.command.name(),
        operands = invocation.operands.len(),
        take = ?config.take,
        "running"
    );

    let rendered = match invocation.command {
        Command::Chars => reverse_chars(&invocation.operands.join(" "), config),
        Command::Words => reverse_words(&invocation.operands, config),
        Command::Lines => reverse_lines(input, config)?,
    };
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}

/// Reverse the characters of `text`.
pub fn reverse_chars(text: &str, config: &RunConfig) -> String {
    let mut rev = Reverse::new(Chars::from(text));
    let chars = pull(&mut rev, config.take);
    let separator = config.separator_or(Command::Chars.default_separator());
    if separator.is_empty() {
        return chars.into_iter().collect();
    }
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Reverse the order of `words`.
pub fn reverse_words(words: &[String], config: &RunConfig) -> String {
    let mut rev = Reverse::new(words);
    let picked = pull(&mut rev, config.take);
    join_strs(&picked, config.separator_or(Command::Words.default_separator()))
}

/// Reverse the order of the lines read from `input`.
pub fn reverse_lines<R: BufRead>(input: R, config: &RunConfig) -> Result<String, CliError> {
    let lines = input.lines().collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(lines = lines.len(), "read input");

    let mut rev = Reverse::new(lines.as_slice());
    let picked = pull(&mut rev, config.take);
    Ok(join_strs(
        &picked,
        config.separator_or(Command::Lines.default_separator()),
    ))
}

/// Drain, or stop after `take` pulls.
fn pull<I: PullIterator>(iter: &mut I, take: Option<usize>) -> Vec<I::Item> {
    match take {
        Some(limit) => take_up_to(iter, limit),
        None => drain(iter),
    }
}

fn join_strs(items: &[&String], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
