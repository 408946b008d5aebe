use tracing::{debug, trace};

use crate::{settings::UntabSettings, transform::Untab, unit::IndentationUnit};


/// Holds the untabbing settings that are currently in effect, along with the indentation unit.
///
/// Suite runners hand a `&mut UntabContext` to the hooks registered through
/// [`SuiteUntab`] and to every test body, so each test sees the settings of the innermost
/// suite that declared any. Plain `#[test]` functions use the thread-local instance
/// instead (see [`with_current`]).
///
/// ## Example
/// ```rust
/// # use untab::UntabContext;
/// let mut context = UntabContext::new();
/// context.set_scope(Some(1), true);
///
/// assert_eq!(context.transform("\n\tfoo\n\tbar\n"), "foo\nbar");
///
/// // Explicit arguments override the scoped settings.
/// assert_eq!(context.transform_with("\n\tfoo\n", Some(0), Some(false)), "\n\tfoo\n");
/// ```
///
/// [`SuiteUntab`]: crate::SuiteUntab
/// [`with_current`]: crate::with_current
#[derive(Clone, Debug, Default)]
pub struct UntabContext {
    settings: UntabSettings,
    unit: IndentationUnit,
}

impl UntabContext {
    /// Initializes a context with unset settings and the default (tab) indentation unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes a context with unset settings and the given indentation unit.
    pub fn with_indentation_unit(unit: IndentationUnit) -> Self {
        Self {
            settings: UntabSettings::UNSET,
            unit,
        }
    }

    /// Returns the settings currently in effect.
    pub fn settings(&self) -> UntabSettings {
        self.settings
    }

    /// Returns the current untabbing depth (`None` if unset).
    pub fn depth(&self) -> Option<usize> {
        self.settings.depth
    }

    /// Returns whether blank lines are currently trimmed.
    pub fn trim(&self) -> bool {
        self.settings.trim
    }

    /// Returns the indentation unit.
    pub fn indentation_unit(&self) -> &IndentationUnit {
        &self.unit
    }

    /// Replaces the indentation unit.
    ///
    /// Unlike depth and trimming, the unit is not scoped: it stays in effect
    /// until replaced again.
    pub fn set_indentation_unit(&mut self, unit: IndentationUnit) {
        debug!(
            previous = %self.unit,
            new = %unit,
            "Replacing indentation unit."
        );

        self.unit = unit;
    }

    /// Sets the untabbing settings for the current suite level.
    ///
    /// A `depth` of `None` or zero disables untabbing altogether,
    /// which also disables trimming (this is the state suites restore when they end).
    pub fn set_scope(&mut self, depth: Option<usize>, trim: bool) {
        let new_settings = match depth {
            Some(depth) if depth > 0 => UntabSettings::new(Some(depth), trim),
            _ => UntabSettings::UNSET,
        };

        trace!(
            depth = ?new_settings.depth,
            trim = new_settings.trim,
            "Setting untab scope."
        );

        self.settings = new_settings;
    }

    /// Applies `settings` as the current scope (see [`Self::set_scope`]).
    pub fn apply(&mut self, settings: UntabSettings) {
        self.set_scope(settings.depth, settings.trim);
    }

    /// Resets the scope to the unset state.
    pub fn reset(&mut self) {
        self.set_scope(None, false);
    }

    /// Untabs `input` using the current settings.
    ///
    /// Non-string values are returned as-is (see [`Untab`]).
    pub fn transform<T>(&self, input: T) -> T::Output
    where
        T: Untab,
    {
        input.untab_with(&self.unit, self.settings)
    }

    /// Untabs `input`, with `depth` and `trim` overriding the current settings
    /// where provided (`None` falls back to the current value).
    pub fn transform_with<T>(&self, input: T, depth: Option<usize>, trim: Option<bool>) -> T::Output
    where
        T: Untab,
    {
        let settings = UntabSettings {
            depth: depth.or(self.settings.depth),
            trim: trim.unwrap_or(self.settings.trim),
        };

        input.untab_with(&self.unit, settings)
    }
}
