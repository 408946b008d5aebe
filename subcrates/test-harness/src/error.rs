use thiserror::Error;
use untab::error::UntabError;

/// Main `Error` for use in unit and integration tests.
///
/// Implements `From` for:
/// - [`UntabError`].
#[derive(Error, Debug)]
pub enum TestError {
    #[error("{} of {} suite tests failed: {}", .failed.len(), .total, .failed.join("; "))]
    SuiteTestsFailed { failed: Vec<String>, total: usize },

    #[error("untab error: {0}")]
    UntabError(#[from] UntabError),
}

/// A main `Result` type for use in unit and integration tests (shorthand for the [`TestError`] error).
pub type TestResult<O = ()> = std::result::Result<O, TestError>;
