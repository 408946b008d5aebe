//! The untabbing transformation itself.
//!
//! Everything here is pure: the functions only look at their arguments,
//! never at any scoped state (see [`UntabContext`] for that).
//!
//! [`UntabContext`]: crate::UntabContext

use std::borrow::Cow;

use crate::{settings::UntabSettings, unit::IndentationUnit};


/// Returns `true` if the line consists only of spaces and tabs.
fn is_blank_line(line: &str) -> bool {
    line.bytes().all(|byte| byte == b' ' || byte == b'\t')
}

/// Characters that start a new line for the purpose of untabbing:
/// line feed, carriage return, and the Unicode line and paragraph separators.
fn is_line_terminator(character: char) -> bool {
    matches!(character, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Removes all leading blank lines (including their line feeds) and the trailing run
/// of line feeds followed by spaces or tabs.
///
/// Blank means *spaces and tabs only*. The first non-blank line keeps its indentation
/// and interior lines are never touched.
///
/// ## Example
/// ```rust
/// # use untab::trim_blank_lines;
/// assert_eq!(trim_blank_lines("\n  \n\tfoo\n\tbar\n\t"), "\tfoo\n\tbar");
/// assert_eq!(trim_blank_lines("foo\n\nbar"), "foo\n\nbar");
/// ```
pub fn trim_blank_lines(input: &str) -> &str {
    let mut start = 0;

    while let Some(line_length) = input[start..].find('\n') {
        if !is_blank_line(&input[start..start + line_length]) {
            break;
        }

        start += line_length + 1;
    }

    let remaining = &input[start..];
    let mut end = remaining.len();

    loop {
        let without_trailing_indentation = remaining[..end]
            .trim_end_matches(|character: char| character == ' ' || character == '\t');

        match without_trailing_indentation.strip_suffix('\n') {
            Some(before_line_feed) => end = before_line_feed.len(),
            None => break,
        }
    }

    &remaining[..end]
}


/// Untabs a string.
///
/// If `settings.trim` is set, leading and trailing blank lines are removed first
/// (see [`trim_blank_lines`]). Then up to `settings.depth` repetitions of `unit` are removed
/// from the start of every line; any indentation beyond that is left intact.
///
/// A line starts after every `\n`, `\r`, `U+2028` and `U+2029` (so a lone `\r` also starts a line),
/// and the unit is never matched across a line terminator.
/// Returns [`Cow::Borrowed`] if nothing had to be removed from the individual lines.
///
/// ## Example
/// ```rust
/// # use untab::{untab_str, IndentationUnit, UntabSettings};
/// let untabbed = untab_str(
///     "\n\t\tA\n\t\t\tB\n\t\tC\n\t",
///     &IndentationUnit::tab(),
///     UntabSettings::new(Some(2), true),
/// );
///
/// assert_eq!(untabbed, "A\n\tB\nC");
/// ```
pub fn untab_str<'i>(
    input: &'i str,
    unit: &IndentationUnit,
    settings: UntabSettings,
) -> Cow<'i, str> {
    let input = if settings.trim {
        trim_blank_lines(input)
    } else {
        input
    };

    if !settings.is_active() {
        return Cow::Borrowed(input);
    }

    let depth = settings.effective_depth();
    let mut untabbed = String::with_capacity(input.len());
    let mut any_line_changed = false;

    for line in input.split_inclusive(is_line_terminator) {
        let (line_content, line_terminator) = match line.char_indices().next_back() {
            Some((terminator_index, last_character)) if is_line_terminator(last_character) => {
                line.split_at(terminator_index)
            }
            _ => (line, ""),
        };

        let stripped_content = unit.strip_leading(line_content, depth);
        if stripped_content.len() != line_content.len() {
            any_line_changed = true;
        }

        untabbed.push_str(stripped_content);
        untabbed.push_str(line_terminator);
    }

    if any_line_changed {
        Cow::Owned(untabbed)
    } else {
        Cow::Borrowed(input)
    }
}



/// A value that can be untabbed.
///
/// String types are transformed with [`untab_str`]. Every other implementor
/// is passed through untouched, which is what lets assertions accept
/// non-string values (`42` stays `42`, `None` stays `None`).
pub trait Untab {
    /// The untabbed value.
    type Output;

    /// Untabs `self` using the given indentation unit and settings.
    fn untab_with(self, unit: &IndentationUnit, settings: UntabSettings) -> Self::Output;
}

impl<'i> Untab for &'i str {
    type Output = Cow<'i, str>;

    fn untab_with(self, unit: &IndentationUnit, settings: UntabSettings) -> Self::Output {
        untab_str(self, unit, settings)
    }
}

impl<'i> Untab for &'i String {
    type Output = Cow<'i, str>;

    fn untab_with(self, unit: &IndentationUnit, settings: UntabSettings) -> Self::Output {
        untab_str(self.as_str(), unit, settings)
    }
}

impl Untab for String {
    type Output = String;

    fn untab_with(self, unit: &IndentationUnit, settings: UntabSettings) -> Self::Output {
        let untabbed = match untab_str(&self, unit, settings) {
            Cow::Borrowed(unchanged) if unchanged.len() == self.len() => None,
            changed => Some(changed.into_owned()),
        };

        untabbed.unwrap_or(self)
    }
}

impl<'i> Untab for Cow<'i, str> {
    type Output = Cow<'i, str>;

    fn untab_with(self, unit: &IndentationUnit, settings: UntabSettings) -> Self::Output {
        match self {
            Cow::Borrowed(borrowed) => untab_str(borrowed, unit, settings),
            Cow::Owned(owned) => Cow::Owned(owned.untab_with(unit, settings)),
        }
    }
}

impl<T> Untab for Option<T>
where
    T: Untab,
{
    type Output = Option<T::Output>;

    fn untab_with(self, unit: &IndentationUnit, settings: UntabSettings) -> Self::Output {
        self.map(|value| value.untab_with(unit, settings))
    }
}

/// Implements [`Untab`] as a no-op for types that are never untabbed.
macro_rules! impl_untab_passthrough {
    ($($passthrough_type:ty),+ $(,)?) => {
        $(
            impl Untab for $passthrough_type {
                type Output = Self;

                #[inline]
                fn untab_with(self, _unit: &IndentationUnit, _settings: UntabSettings) -> Self::Output {
                    self
                }
            }
        )+
    };
}

impl_untab_passthrough!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool, char, (),
);
