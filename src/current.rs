//! Thread-local untab context for plain `#[test]` functions.
//!
//! The standard test harness runs each test on its own thread, so keeping one
//! [`UntabContext`] per thread scopes its settings to the test that set them.
//! The [`untab`](macro@crate::untab) attribute and the `assert_untabbed_*` macros build on this.

use std::{cell::RefCell, marker::PhantomData};

use crate::{
    context::UntabContext,
    settings::UntabSettings,
    transform::Untab,
    unit::IndentationUnit,
};


thread_local! {
    static CURRENT_CONTEXT: RefCell<UntabContext> = RefCell::new(UntabContext::new());
}


/// Calls `function` with this thread's [`UntabContext`].
///
/// # Panics
/// Panics if called re-entrantly from inside `function`.
pub fn with_current<F, R>(function: F) -> R
where
    F: FnOnce(&mut UntabContext) -> R,
{
    CURRENT_CONTEXT.with(|context| function(&mut context.borrow_mut()))
}

/// Untabs `input` using this thread's current settings.
///
/// ## Example
/// ```rust
/// let _scope = untab::enter(untab::UntabSettings::new(Some(1), true));
///
/// assert_eq!(untab::untab("\n\tfoo\n"), "foo");
/// assert_eq!(untab::untab(42), 42);
/// ```
pub fn untab<T>(input: T) -> T::Output
where
    T: Untab,
{
    with_current(|context| context.transform(input))
}

/// Replaces this thread's indentation unit.
pub fn set_indentation_unit(unit: IndentationUnit) {
    with_current(|context| context.set_indentation_unit(unit));
}

/// Applies `settings` to this thread's context until the returned guard is dropped.
///
/// Dropping the guard resets the settings to the unset state, even if another
/// scope was active when this one was entered.
pub fn enter(settings: UntabSettings) -> ScopeGuard {
    with_current(|context| context.apply(settings));

    ScopeGuard {
        _not_send: PhantomData,
    }
}


/// Keeps this thread's untab settings in effect; see [`enter`].
#[must_use = "the untab scope ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScopeGuard {
    /// The guard resets the context of the thread it was created on.
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // The thread-local may already be gone if the guard outlives it during thread teardown.
        let _ = CURRENT_CONTEXT.try_with(|context| {
            if let Ok(mut context) = context.try_borrow_mut() {
                context.reset();
            }
        });
    }
}
