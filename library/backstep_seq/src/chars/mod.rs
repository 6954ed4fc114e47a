//! Character sequence materialized from a string.

use std::fmt;

use crate::Sequence;

/// A string's characters, collected once so each one has a position.
///
/// `&str` is indexed by byte, so positional lookup of the `i`-th character
/// would be O(n). Collecting into a `Vec<char>` up front keeps `at` O(1).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Chars {
    chars: Vec<char>,
}

impl Chars {
    /// Collect the characters of `text`.
    pub fn new(text: &str) -> Self {
        Chars {
            chars: text.chars().collect(),
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Rebuild the original string.
    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

impl Sequence for Chars {
    type Item = char;

    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn at(&self, index: usize) -> char {
        self.chars[index]
    }
}

impl From<&str> for Chars {
    fn from(text: &str) -> Self {
        Chars::new(text)
    }
}

impl From<String> for Chars {
    fn from(text: String) -> Self {
        Chars::new(&text)
    }
}

impl FromIterator<char> for Chars {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Chars {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Chars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &ch in &self.chars {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Chars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chars({:?}, len={})", self.to_string(), self.chars.len())
    }
}

#[cfg(test)]
mod tests;
