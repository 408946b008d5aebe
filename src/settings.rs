/// Untabbing settings for a single suite level.
///
/// The default value is the *unset* state: no indentation is stripped
/// and blank lines are left alone.
///
/// ## Example
/// ```rust
/// # use untab::UntabSettings;
/// let settings = UntabSettings {
///     depth: Some(2),
///     ..Default::default()
/// };
///
/// assert!(settings.is_active());
/// assert!(!UntabSettings::UNSET.is_active());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UntabSettings {
    /// How many indentation units to strip from the start of each line.
    ///
    /// `None` means untabbing is unset for this level. `Some(0)` strips nothing as well.
    pub depth: Option<usize>,

    /// Whether to remove leading and trailing blank lines before untabbing.
    pub trim: bool,
}

impl UntabSettings {
    /// The unset state: nothing is stripped and blank lines are kept.
    pub const UNSET: Self = Self {
        depth: None,
        trim: false,
    };

    /// Trimming is enabled when a depth is declared without an explicit `trim` value.
    pub const DEFAULT_DECLARED_TRIM: bool = true;

    /// Initializes settings with the given `depth` and `trim`.
    pub const fn new(depth: Option<usize>, trim: bool) -> Self {
        Self { depth, trim }
    }

    /// Settings as they start out for a freshly declared suite:
    /// no depth, but trimming enabled once a depth gets declared.
    pub const fn declaration_default() -> Self {
        Self {
            depth: None,
            trim: Self::DEFAULT_DECLARED_TRIM,
        }
    }

    /// Returns `true` if these settings strip any indentation.
    pub fn is_active(&self) -> bool {
        matches!(self.depth, Some(depth) if depth > 0)
    }

    /// Returns the number of indentation units to strip (zero if unset).
    pub fn effective_depth(&self) -> usize {
        self.depth.unwrap_or(0)
    }
}
