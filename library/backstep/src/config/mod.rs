//! Run configuration parsed from command-line flags.

use crate::error::CliError;

/// Options shared by every reversing command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Pull at most this many elements. `None` drains the iterator.
    pub take: Option<usize>,
    /// Joiner between output elements. `None` uses the command's default.
    pub separator: Option<String>,
    /// Raise the log level to `debug`.
    pub verbose: bool,
}

impl RunConfig {
    /// Apply one flag to the config.
    ///
    /// Returns `Ok(false)` if `arg` is not a flag at all (an operand), so the
    /// caller can keep it.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, CliError> {
        if let Some(value) = arg.strip_prefix("--take=") {
            let limit = value.parse::<usize>().map_err(|_| CliError::InvalidOption {
                option: "--take",
                value: value.to_string(),
            })?;
            self.take = Some(limit);
        } else if let Some(value) = arg.strip_prefix("--separator=") {
            self.separator = Some(unescape(value));
        } else if arg == "--verbose" || arg == "-v" {
            self.verbose = true;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::UnknownOption(arg.to_string()));
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// The configured separator, or `default` if none was given.
    pub fn separator_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.separator.as_deref().unwrap_or(default)
    }
}

/// Expand `\n`, `\t`, and `\\` so separators can be typed in a shell.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
