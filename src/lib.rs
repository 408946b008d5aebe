//! Strips leading indentation from multi-line string literals before they are compared in tests,
//! so expected values can be indented along with the surrounding test code.
//!
//!
//! # Main features
//! - untab strings: remove up to `depth` units of indentation (tabs by default) from every line,
//!   optionally trimming leading and trailing blank lines first,
//! - scope those settings to test suites:
//!     - through a test runner's before/after-each hooks ([`SuiteUntab`] and [`LifecycleHooks`]), or
//!     - through the [`untab`](macro@untab) attribute on `#[test]` functions and test modules, and
//! - assert on untabbed values ([`UntabAssertions`], [`assert_untabbed_eq!`] and [`assert_untabbed_contains!`]).
//!
//! Only the *expected* value is untabbed; the actual value is compared as-is.
//! Non-string values pass through untouched, so the assertions work on anything comparable.
//!
//! <br>
//!
//! # Feature flags
//! - `miette` (*disabled by default*): derives [`miette::Diagnostic`](../miette/derive.Diagnostic.html)
//!   on [`UntabError`](error::UntabError).
//!
//!
//! <br>
//!
//! # Examples
//!
//! Annotating a test module (here with four-space indentation units);
//! nested modules may override the settings:
//! ```no_run
//! #[untab::untab(depth = 3, unit = "    ")]
//! mod rendering {
//!     use untab::assert_untabbed_eq;
//!
//!     #[test]
//!     fn renders_list() {
//!         assert_untabbed_eq!(
//!             "A\nB\nC",
//!             "
//!             A
//!             B
//!             C
//!             "
//!         );
//!     }
//!
//!     #[untab::untab(depth = 4)]
//!     mod nested {
//!         #[test]
//!         fn sees_the_inner_depth() {
//!             untab::with_current(|context| assert_eq!(context.depth(), Some(4)));
//!         }
//!     }
//! }
//! ```
//!
//! Declaring settings for a suite of an external runner:
//! ```rust
//! # use untab::{LifecycleHooks, ScopeHook, SuiteUntab, UntabAssertions, UntabContext};
//! # #[derive(Default)]
//! # struct Runner { before: Vec<ScopeHook>, after: Vec<ScopeHook> }
//! # impl LifecycleHooks for Runner {
//! #     fn before_each(&mut self, hook: ScopeHook) { self.before.push(hook); }
//! #     fn after_each(&mut self, hook: ScopeHook) { self.after.push(hook); }
//! # }
//! let mut runner = Runner::default();
//!
//! let mut untab = SuiteUntab::new();
//! untab.assign_depth(&mut runner, Some(1));
//!
//! // What the runner does around each test of the suite.
//! let mut context = UntabContext::new();
//! for hook in &runner.before {
//!     hook(&mut context);
//! }
//!
//! context.assert_untabbed_eq("A\nB", "\n\tA\n\tB\n");
//!
//! for hook in runner.after.iter().rev() {
//!     hook(&mut context);
//! }
//! ```

#![warn(missing_docs)]

extern crate self as untab;


/// This brings in the README's doctests (and is present only when testing).
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;


mod assertion;
mod context;
mod current;
pub mod error;
mod hooks;
mod macros;
mod settings;
mod transform;
mod unit;

pub use assertion::UntabAssertions;
pub use context::UntabContext;
pub use current::{enter, set_indentation_unit, untab, with_current, ScopeGuard};
pub use hooks::{LifecycleHooks, ScopeHook, SuiteUntab};
pub use settings::UntabSettings;
pub use transform::{trim_blank_lines, untab_str, Untab};
pub use unit::{IndentationUnit, DEFAULT_INDENTATION_PATTERN};
/// Scopes untab settings to a test function, or to every test in an inline module.
///
/// See the [`untab_macros`](../untab_macros/attr.untab.html) documentation for details.
pub use untab_macros::untab;


#[doc(hidden)]
pub mod __private {
    pub use pretty_assertions;
}
