//! Scoping untab settings to test suites through a test runner's lifecycle hooks.
//!
//! The runner is an external collaborator: this module only defines what it
//! needs to provide ([`LifecycleHooks`]) and how suites declare their settings
//! ([`SuiteUntab`]). `untab-test-harness` contains a small runner implementing it.

use tracing::debug;

use crate::{context::UntabContext, settings::UntabSettings};


/// A callback the test runner invokes around each test in a suite.
pub type ScopeHook = Box<dyn Fn(&mut UntabContext) + 'static>;


/// Registration of per-test setup and teardown callbacks, scoped to the suite
/// currently being declared.
///
/// Implementors must run `before_each` hooks before every test of the suite
/// (including tests of nested suites), outer suites first, and `after_each` hooks
/// after every such test, inner suites first.
pub trait LifecycleHooks {
    /// Registers a hook to run before every test in the current suite.
    fn before_each(&mut self, hook: ScopeHook);

    /// Registers a hook to run after every test in the current suite.
    fn after_each(&mut self, hook: ScopeHook);
}

impl<H> LifecycleHooks for &mut H
where
    H: LifecycleHooks + ?Sized,
{
    fn before_each(&mut self, hook: ScopeHook) {
        (**self).before_each(hook);
    }

    fn after_each(&mut self, hook: ScopeHook) {
        (**self).after_each(hook);
    }
}



/// Untab settings as declared by a single suite.
///
/// Assigning a value that differs from the declared one registers a pair of hooks with
/// the runner: before each test, the suite's settings are applied to the [`UntabContext`];
/// after each test, the context is reset to the unset state. Re-assigning the declared
/// value is a no-op.
///
/// Leaving a suite resets the settings instead of restoring the enclosing suite's ones.
/// With runners that apply `before_each` hooks anew for every test this is not observable,
/// since every test starts from its own chain of hooks.
///
/// ## Example
/// ```rust
/// # use untab::{LifecycleHooks, ScopeHook, SuiteUntab, UntabContext};
/// #[derive(Default)]
/// struct Hooks {
///     before: Vec<ScopeHook>,
///     after: Vec<ScopeHook>,
/// }
///
/// impl LifecycleHooks for Hooks {
///     fn before_each(&mut self, hook: ScopeHook) {
///         self.before.push(hook);
///     }
///
///     fn after_each(&mut self, hook: ScopeHook) {
///         self.after.push(hook);
///     }
/// }
///
/// let mut hooks = Hooks::default();
/// let mut untab = SuiteUntab::new();
///
/// assert!(untab.assign_depth(&mut hooks, Some(2)));
/// assert!(!untab.assign_depth(&mut hooks, Some(2)));
/// assert_eq!(hooks.before.len(), 1);
///
/// let mut context = UntabContext::new();
/// (hooks.before[0])(&mut context);
/// assert_eq!(context.depth(), Some(2));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SuiteUntab {
    declared: UntabSettings,
    registered_hook_pairs: usize,
}

impl SuiteUntab {
    /// Initializes the declaration record of a top-level suite.
    ///
    /// Nothing is declared yet, but trimming will be enabled once a depth is
    /// (see [`UntabSettings::declaration_default`]).
    pub fn new() -> Self {
        Self {
            declared: UntabSettings::declaration_default(),
            registered_hook_pairs: 0,
        }
    }

    /// Initializes the declaration record of a suite nested inside this one.
    ///
    /// The nested suite inherits the declared settings, so assigning the same value
    /// again does not register anything: the enclosing suite's hooks already apply it.
    pub fn nested(&self) -> Self {
        Self {
            declared: self.declared,
            registered_hook_pairs: 0,
        }
    }

    /// Returns the declared settings.
    pub fn declared(&self) -> UntabSettings {
        self.declared
    }

    /// Returns the declared depth.
    pub fn depth(&self) -> Option<usize> {
        self.declared.depth
    }

    /// Returns whether trimming is declared.
    pub fn trim(&self) -> bool {
        self.declared.trim
    }

    /// Returns how many before/after hook pairs this suite has registered.
    pub fn registered_hook_pairs(&self) -> usize {
        self.registered_hook_pairs
    }

    /// Declares the untabbing depth for the current suite.
    ///
    /// Returns `true` if hooks were registered, `false` if `depth` was already declared.
    pub fn assign_depth<H>(&mut self, hooks: &mut H, depth: Option<usize>) -> bool
    where
        H: LifecycleHooks + ?Sized,
    {
        if depth == self.declared.depth {
            return false;
        }

        self.declared.depth = depth;
        self.register_hooks(hooks);

        true
    }

    /// Declares whether blank lines are trimmed for the current suite.
    ///
    /// Returns `true` if hooks were registered, `false` if `trim` was already declared.
    pub fn assign_trim<H>(&mut self, hooks: &mut H, trim: bool) -> bool
    where
        H: LifecycleHooks + ?Sized,
    {
        if trim == self.declared.trim {
            return false;
        }

        self.declared.trim = trim;
        self.register_hooks(hooks);

        true
    }

    fn register_hooks<H>(&mut self, hooks: &mut H)
    where
        H: LifecycleHooks + ?Sized,
    {
        let settings = self.declared;

        hooks.before_each(Box::new(move |context| context.apply(settings)));
        hooks.after_each(Box::new(|context| context.reset()));

        self.registered_hook_pairs += 1;

        debug!(
            depth = ?settings.depth,
            trim = settings.trim,
            registered_hook_pairs = self.registered_hook_pairs,
            "Registered untab hooks for suite."
        );
    }
}

impl Default for SuiteUntab {
    fn default() -> Self {
        Self::new()
    }
}
