use std::fmt::Debug;

use crate::{context::UntabContext, transform::Untab};


/// String assertions that untab their expected value first.
///
/// The expected value (the indented literal written in the test) is untabbed with the
/// context's current settings, then handed to the usual comparison. The actual value is
/// compared as-is. Failures panic exactly like the underlying assertion would.
pub trait UntabAssertions {
    /// Untabs `expected`, then asserts it equals `actual`
    /// (using [`pretty_assertions::assert_eq`] for a readable diff).
    ///
    /// ## Example
    /// ```rust
    /// # use untab::{UntabAssertions, UntabContext};
    /// let mut context = UntabContext::new();
    /// context.set_scope(Some(2), true);
    ///
    /// context.assert_untabbed_eq(
    ///     "first line\n\tsecond line",
    ///     "\n\t\tfirst line\n\t\t\tsecond line\n\t",
    /// );
    /// ```
    fn assert_untabbed_eq<A, E>(&self, actual: A, expected: E)
    where
        E: Untab,
        E::Output: Debug,
        A: PartialEq<E::Output> + Debug;

    /// Untabs `needle`, then asserts `haystack` contains it.
    fn assert_untabbed_contains<H, N>(&self, haystack: H, needle: N)
    where
        H: AsRef<str>,
        N: Untab,
        N::Output: AsRef<str>;
}

impl UntabAssertions for UntabContext {
    #[track_caller]
    fn assert_untabbed_eq<A, E>(&self, actual: A, expected: E)
    where
        E: Untab,
        E::Output: Debug,
        A: PartialEq<E::Output> + Debug,
    {
        let expected = self.transform(expected);

        pretty_assertions::assert_eq!(actual, expected);
    }

    #[track_caller]
    fn assert_untabbed_contains<H, N>(&self, haystack: H, needle: N)
    where
        H: AsRef<str>,
        N: Untab,
        N::Output: AsRef<str>,
    {
        let needle = self.transform(needle);

        assert!(
            haystack.as_ref().contains(needle.as_ref()),
            "string does not contain the expected substring:\n  string: {:?}\n  substring: {:?}",
            haystack.as_ref(),
            needle.as_ref(),
        );
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_depth(depth: usize) -> UntabContext {
        let mut context = UntabContext::new();
        context.set_scope(Some(depth), true);
        context
    }

    #[test]
    fn equality_untabs_the_expected_value() {
        let context = context_with_depth(1);

        context.assert_untabbed_eq("A\nB\nC", "\n\tA\n\tB\n\tC\n");
        context.assert_untabbed_eq(String::from("A\n\tB"), String::from("\n\tA\n\t\tB\n\t"));
    }

    #[test]
    fn equality_passes_non_strings_through() {
        let context = context_with_depth(3);

        context.assert_untabbed_eq(42, 42);
        context.assert_untabbed_eq(None::<i32>, None::<i32>);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn equality_fails_on_mismatch() {
        let context = context_with_depth(1);

        context.assert_untabbed_eq("A\nB", "\n\tA\n\t\tB\n");
    }

    #[test]
    fn actual_value_is_not_untabbed() {
        let context = context_with_depth(1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            context.assert_untabbed_eq("\tA", "\tA");
        }));

        assert!(result.is_err());
    }

    #[test]
    fn contains_untabs_the_needle() {
        let context = context_with_depth(2);

        context.assert_untabbed_contains("header\nA\n\tB\nfooter", "\n\t\tA\n\t\t\tB\n\t");
    }

    #[test]
    #[should_panic(expected = "does not contain the expected substring")]
    fn contains_fails_when_missing() {
        let context = context_with_depth(1);

        context.assert_untabbed_contains("A\nB", "\n\tC\n");
    }
}
