//! Indentation units, i.e. what a single level of indentation looks like.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::UntabError;


/// Pattern fragment of the default indentation unit: a single horizontal tab.
pub const DEFAULT_INDENTATION_PATTERN: &str = r"\t";

/// The default unit is compiled once per process and cloned from here afterwards.
static DEFAULT_INDENTATION_UNIT: Lazy<IndentationUnit> = Lazy::new(|| {
    IndentationUnit::pattern(DEFAULT_INDENTATION_PATTERN)
        .expect("default indentation pattern should always compile")
});


/// Describes what one unit of indentation looks like.
///
/// A unit is a regular expression *fragment*: when untabbing at depth `n`,
/// up to `n` consecutive matches of this fragment are removed from the start of each line.
/// The default is a single tab (see [`DEFAULT_INDENTATION_PATTERN`]).
///
/// ## Example
/// ```rust
/// # use untab::IndentationUnit;
/// # fn main() -> Result<(), untab::error::UntabError> {
/// // Four spaces per indentation level.
/// let four_spaces = IndentationUnit::literal("    ")?;
/// assert_eq!(four_spaces.as_pattern(), "    ");
///
/// // Either a tab or four spaces.
/// let mixed = IndentationUnit::pattern(r"\t|\x20{4}")?;
/// assert_eq!(mixed.as_pattern(), r"\t|\x20{4}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct IndentationUnit {
    fragment: String,

    /// The fragment, anchored to the start of the haystack.
    leading: Regex,
}

impl IndentationUnit {
    /// Returns the default indentation unit (a single tab).
    pub fn tab() -> Self {
        DEFAULT_INDENTATION_UNIT.clone()
    }

    /// Builds an indentation unit from a regular expression fragment.
    ///
    /// The fragment is wrapped in a non-capturing group, so alternations such as `\t|  `
    /// behave as a single unit.
    pub fn pattern<S>(fragment: S) -> Result<Self, UntabError>
    where
        S: Into<String>,
    {
        let fragment = fragment.into();

        if fragment.is_empty() {
            return Err(UntabError::EmptyIndentationPattern);
        }

        let leading = Regex::new(&format!("^(?:{})", fragment)).map_err(|error| {
            UntabError::InvalidIndentationPattern {
                pattern: fragment.clone(),
                error,
            }
        })?;

        Ok(Self { fragment, leading })
    }

    /// Builds an indentation unit that matches `text` verbatim
    /// (any regular expression metacharacters are escaped).
    pub fn literal(text: &str) -> Result<Self, UntabError> {
        Self::pattern(regex::escape(text))
    }

    /// Returns the regular expression fragment this unit was built from.
    pub fn as_pattern(&self) -> &str {
        &self.fragment
    }

    /// Removes up to `max_units` leading repetitions of this unit from `line`.
    ///
    /// Stops early as soon as the unit no longer matches, or if it matches
    /// without consuming anything.
    pub(crate) fn strip_leading<'l>(&self, line: &'l str, max_units: usize) -> &'l str {
        let mut remaining = line;

        for _ in 0..max_units {
            match self.leading.find(remaining) {
                Some(unit_match) if unit_match.end() > 0 => {
                    remaining = &remaining[unit_match.end()..];
                }
                _ => break,
            }
        }

        remaining
    }
}

impl Default for IndentationUnit {
    fn default() -> Self {
        Self::tab()
    }
}

impl PartialEq for IndentationUnit {
    fn eq(&self, other: &Self) -> bool {
        self.fragment == other.fragment
    }
}

impl Eq for IndentationUnit {}

impl fmt::Debug for IndentationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndentationUnit")
            .field(&self.fragment)
            .finish()
    }
}

impl fmt::Display for IndentationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment)
    }
}

impl FromStr for IndentationUnit {
    type Err = UntabError;

    fn from_str(fragment: &str) -> Result<Self, Self::Err> {
        Self::pattern(fragment)
    }
}
