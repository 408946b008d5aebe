pub use crate::error::{TestError, TestResult};
pub use crate::init_test_tracing;
pub use crate::suite::{Suite, SuiteReport, TestOutcome};
