//! Error types.
//!
//! Untabbing itself never fails: non-string values pass through and
//! a depth of zero or unset is a no-op. The only fallible operation is
//! building an [`IndentationUnit`] from a user-provided pattern fragment.
//!
//! [`IndentationUnit`]: crate::IndentationUnit

use thiserror::Error;


/// An error that can occur when configuring the indentation unit.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum UntabError {
    /// The provided pattern fragment is empty.
    ///
    /// An empty unit would match at every line start without consuming anything,
    /// so it is rejected up front. To disable untabbing, set the depth to zero or unset it instead.
    #[error("indentation unit pattern is empty")]
    EmptyIndentationPattern,

    /// The provided pattern fragment is not a valid regular expression.
    ///
    /// The inner [`regex::Error`] describes what exactly is wrong with it.
    #[error("invalid indentation unit pattern: {pattern:?}")]
    InvalidIndentationPattern {
        /// The pattern fragment that failed to compile.
        pattern: String,

        /// Underlying regex error describing why the pattern could not be compiled.
        #[source]
        error: regex::Error,
    },
}
