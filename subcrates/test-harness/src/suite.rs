//! A minimal mocha-style suite runner.
//!
//! Suites nest; each test runs with the `before_each` hooks of every enclosing suite
//! (outermost first) and the `after_each` hooks afterwards (innermost first).

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, trace};
use untab::{LifecycleHooks, ScopeHook, UntabContext};

use crate::error::{TestError, TestResult};


/// A hook that runs around each test of a suite.
pub type SuiteHook<C> = Box<dyn Fn(&mut C)>;

/// The body of a single test.
pub type TestBody<C> = Box<dyn Fn(&mut C)>;


struct TestCase<C> {
    name: String,
    body: TestBody<C>,
}

enum SuiteItem<C> {
    Test(TestCase<C>),
    Suite(Suite<C>),
}


/// A named group of tests and nested suites, with its own before/after-each hooks.
pub struct Suite<C> {
    name: String,
    before_each_hooks: Vec<SuiteHook<C>>,
    after_each_hooks: Vec<SuiteHook<C>>,
    items: Vec<SuiteItem<C>>,
}

impl<C> Suite<C> {
    /// Creates an empty suite.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            before_each_hooks: Vec::new(),
            after_each_hooks: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Declares a nested suite. `declare` runs immediately, like a mocha `describe` body.
    pub fn describe<S, F>(&mut self, name: S, declare: F)
    where
        S: Into<String>,
        F: FnOnce(&mut Suite<C>),
    {
        let mut child = Suite::new(name);
        declare(&mut child);

        self.items.push(SuiteItem::Suite(child));
    }

    /// Declares a test of this suite.
    pub fn it<S, F>(&mut self, name: S, body: F)
    where
        S: Into<String>,
        F: Fn(&mut C) + 'static,
    {
        self.items.push(SuiteItem::Test(TestCase {
            name: name.into(),
            body: Box::new(body),
        }));
    }

    /// Registers a hook to run before each test of this suite (nested suites included).
    pub fn before_each<F>(&mut self, hook: F)
    where
        F: Fn(&mut C) + 'static,
    {
        self.before_each_hooks.push(Box::new(hook));
    }

    /// Registers a hook to run after each test of this suite (nested suites included).
    pub fn after_each<F>(&mut self, hook: F)
    where
        F: Fn(&mut C) + 'static,
    {
        self.after_each_hooks.push(Box::new(hook));
    }

    pub fn before_each_count(&self) -> usize {
        self.before_each_hooks.len()
    }

    pub fn after_each_count(&self) -> usize {
        self.after_each_hooks.len()
    }

    /// Runs every test of this suite and its nested suites, in declaration order.
    ///
    /// A panicking test is recorded as failed; the remaining tests still run.
    pub fn run(&self, context: &mut C) -> SuiteReport {
        let mut report = SuiteReport::default();
        let mut ancestors = Vec::new();

        self.run_within(&mut ancestors, context, &mut report);

        debug!(
            suite = %self.name,
            passed = report.passed_count(),
            failed = report.failed_count(),
            "finished running suite"
        );

        report
    }

    fn run_within<'s>(
        &'s self,
        ancestors: &mut Vec<&'s Suite<C>>,
        context: &mut C,
        report: &mut SuiteReport,
    ) {
        ancestors.push(self);

        for item in &self.items {
            match item {
                SuiteItem::Test(test) => {
                    let mut path: Vec<String> =
                        ancestors.iter().map(|suite| suite.name.clone()).collect();
                    path.push(test.name.clone());

                    trace!(test = %path.join(" > "), "running test");

                    for suite in ancestors.iter() {
                        for hook in &suite.before_each_hooks {
                            hook(context);
                        }
                    }

                    let outcome = catch_unwind(AssertUnwindSafe(|| (test.body)(context)));

                    for suite in ancestors.iter().rev() {
                        for hook in &suite.after_each_hooks {
                            hook(context);
                        }
                    }

                    let failure = outcome.err().map(|payload| {
                        if let Some(message) = payload.downcast_ref::<&str>() {
                            (*message).to_string()
                        } else if let Some(message) = payload.downcast_ref::<String>() {
                            message.clone()
                        } else {
                            String::from("test panicked")
                        }
                    });

                    report.outcomes.push(TestOutcome { path, failure });
                }
                SuiteItem::Suite(child) => child.run_within(ancestors, context, report),
            }
        }

        ancestors.pop();
    }
}

impl LifecycleHooks for Suite<UntabContext> {
    fn before_each(&mut self, hook: ScopeHook) {
        self.before_each_hooks.push(hook);
    }

    fn after_each(&mut self, hook: ScopeHook) {
        self.after_each_hooks.push(hook);
    }
}


/// The result of a single test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestOutcome {
    /// Suite names from the root down, followed by the test name.
    pub path: Vec<String>,

    /// The panic message, if the test failed.
    pub failure: Option<String>,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    pub fn full_name(&self) -> String {
        self.path.join(" > ")
    }
}


/// Outcomes of a [`Suite::run`], in execution order.
#[derive(Clone, Debug, Default)]
pub struct SuiteReport {
    outcomes: Vec<TestOutcome>,
}

impl SuiteReport {
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    /// Looks up an outcome by test name (the last path segment).
    pub fn outcome(&self, test_name: &str) -> Option<&TestOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.path.last().map(String::as_str) == Some(test_name))
    }

    /// Returns `Err` listing the failed tests, if any.
    pub fn into_result(self) -> TestResult {
        let total = self.outcomes.len();

        let failed: Vec<String> = self
            .outcomes
            .iter()
            .filter(|outcome| !outcome.passed())
            .map(|outcome| {
                format!(
                    "{}: {}",
                    outcome.full_name(),
                    outcome.failure.as_deref().unwrap_or_default()
                )
            })
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(TestError::SuiteTestsFailed { failed, total })
        }
    }
}



#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn hooks_wrap_each_test_outermost_first() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut root = Suite::<()>::new("root");

        let entry = |label: &'static str| {
            let log = log.clone();
            move |_: &mut ()| log.borrow_mut().push(label.to_string())
        };

        root.before_each(entry("root before"));
        root.after_each(entry("root after"));
        root.describe("inner", |inner| {
            inner.before_each(entry("inner before"));
            inner.after_each(entry("inner after"));
            inner.it("test", entry("test"));
        });

        let report = root.run(&mut ());
        assert_eq!(report.passed_count(), 1);

        assert_eq!(
            *log.borrow(),
            vec![
                "root before",
                "inner before",
                "test",
                "inner after",
                "root after"
            ]
        );
    }

    #[test]
    fn sibling_suites_do_not_share_hooks() {
        let counter = Rc::new(RefCell::new(0usize));
        let mut root = Suite::<()>::new("root");

        let hook_counter = counter.clone();
        root.describe("first", move |first| {
            first.before_each(move |_| *hook_counter.borrow_mut() += 1);
            first.it("a", |_| {});
            first.it("b", |_| {});
        });
        root.describe("second", |second| {
            second.it("c", |_| {});
        });

        let report = root.run(&mut ());

        assert_eq!(report.outcomes().len(), 3);
        assert_eq!(*counter.borrow(), 2);
    }

    #[test]
    fn failing_tests_are_reported_and_after_hooks_still_run() {
        let after_calls = Rc::new(RefCell::new(0usize));
        let mut root = Suite::<()>::new("root");

        let hook_calls = after_calls.clone();
        root.after_each(move |_| *hook_calls.borrow_mut() += 1);
        root.it("fails", |_| panic!("boom"));
        root.it("passes", |_| {});

        let report = root.run(&mut ());

        assert_eq!(*after_calls.borrow(), 2);
        assert_eq!(report.failed_count(), 1);

        let failed = report.outcome("fails").unwrap();
        assert_eq!(failed.failure.as_deref(), Some("boom"));
        assert_eq!(failed.full_name(), "root > fails");

        assert!(matches!(
            report.into_result(),
            Err(TestError::SuiteTestsFailed { total: 2, .. })
        ));
    }
}
