/// Untabs the expected value using the current thread's settings,
/// then asserts it equals the actual value.
///
/// This is the thread-local counterpart of
/// [`UntabAssertions::assert_untabbed_eq`](crate::UntabAssertions::assert_untabbed_eq),
/// meant for plain `#[test]` functions (usually annotated with [`untab`](macro@crate::untab)).
///
/// ## Example
/// ```rust
/// # use untab::assert_untabbed_eq;
/// let _scope = untab::enter(untab::UntabSettings::new(Some(1), true));
///
/// assert_untabbed_eq!(
///     "fn main() {}",
///     "
/// \tfn main() {}
/// "
/// );
/// ```
///
/// A custom failure message can follow the `otherwise` keyword:
/// ```rust
/// # use untab::assert_untabbed_eq;
/// let rendered = String::from("A\nB");
///
/// assert_untabbed_eq!(
///     rendered,
///     "A\nB",
///     otherwise "rendered output does not match ({} lines)", 2
/// );
/// ```
#[macro_export]
macro_rules! assert_untabbed_eq {
    ( $actual:expr, $expected:expr $(,)? ) => {{
        let __untabbed_expected = $crate::untab($expected);

        $crate::__private::pretty_assertions::assert_eq!($actual, __untabbed_expected);
    }};

    ( $actual:expr, $expected:expr, otherwise $($arg:tt)+ ) => {{
        let __untabbed_expected = $crate::untab($expected);

        $crate::__private::pretty_assertions::assert_eq!(
            $actual,
            __untabbed_expected,
            $($arg)+
        );
    }};
}

/// Untabs the expected substring using the current thread's settings,
/// then asserts the string contains it.
///
/// ## Example
/// ```rust
/// # use untab::assert_untabbed_contains;
/// let _scope = untab::enter(untab::UntabSettings::new(Some(2), true));
///
/// assert_untabbed_contains!(
///     "header\nfoo\n\tbar\nfooter",
///     "\n\t\tfoo\n\t\t\tbar\n\t"
/// );
/// ```
#[macro_export]
macro_rules! assert_untabbed_contains {
    ( $haystack:expr, $needle:expr $(,)? ) => {{
        let __untabbed_needle = $crate::untab($needle);
        let __haystack = &$haystack;

        assert!(
            ::core::convert::AsRef::<str>::as_ref(__haystack)
                .contains(::core::convert::AsRef::<str>::as_ref(&__untabbed_needle)),
            "string does not contain the expected substring:\n  string: {:?}\n  substring: {:?}",
            ::core::convert::AsRef::<str>::as_ref(__haystack),
            ::core::convert::AsRef::<str>::as_ref(&__untabbed_needle),
        );
    }};

    ( $haystack:expr, $needle:expr, otherwise $($arg:tt)+ ) => {{
        let __untabbed_needle = $crate::untab($needle);
        let __haystack = &$haystack;

        assert!(
            ::core::convert::AsRef::<str>::as_ref(__haystack)
                .contains(::core::convert::AsRef::<str>::as_ref(&__untabbed_needle)),
            $($arg)+
        );
    }};
}
