use untab::{assert_untabbed_contains, assert_untabbed_eq, untab, with_current, UntabSettings};



#[test]
#[untab(depth = 2)]
fn function_scope_untabs_the_expected_value() {
    assert_eq!(with_current(|context| context.settings()), UntabSettings::new(Some(2), true));

    assert_untabbed_eq!(
        "struct Point;\n\nimpl Point {}",
        "
		struct Point;

		impl Point {}
		"
    );
}


#[test]
#[untab(depth = 1, trim = false)]
fn function_scope_without_trimming() {
    assert_untabbed_eq!("\nA\n\tB\n", "\n\tA\n\t\tB\n\t");
}


#[test]
fn scope_ends_with_the_function() {
    #[untab(depth = 3)]
    fn scoped() -> Option<usize> {
        with_current(|context| context.depth())
    }

    assert_eq!(scoped(), Some(3));
    assert_eq!(with_current(|context| context.settings()), UntabSettings::UNSET);
}


#[untab(depth = 3)]
mod outer {
    use untab::{assert_untabbed_eq, with_current};

    #[test]
    fn uses_the_outer_depth() {
        assert_eq!(with_current(|context| context.depth()), Some(3));

        assert_untabbed_eq!(
            "A\nB",
            "
			A
			B
			"
        );
    }

    #[untab::untab(depth = 4)]
    mod inner {
        use untab::with_current;

        #[test]
        fn uses_the_inner_depth() {
            assert_eq!(with_current(|context| context.depth()), Some(4));
            assert!(with_current(|context| context.trim()));
        }

        #[untab::untab(trim = false)]
        mod innermost {
            use untab::with_current;

            #[test]
            fn inherits_the_depth_it_does_not_override() {
                assert_eq!(with_current(|context| context.depth()), Some(4));
                assert!(!with_current(|context| context.trim()));
            }
        }
    }

    mod without_own_attribute {
        use untab::with_current;

        #[test]
        fn inherits_the_outer_settings() {
            assert_eq!(with_current(|context| context.depth()), Some(3));
        }
    }

    #[test]
    fn sibling_after_the_inner_module_uses_the_outer_depth() {
        assert_eq!(with_current(|context| context.depth()), Some(3));
    }

    fn helper_is_left_alone() -> Option<usize> {
        with_current(|context| context.depth())
    }

    #[test]
    fn helpers_see_the_calling_test_scope() {
        assert_eq!(helper_is_left_alone(), Some(3));
    }
}


#[test]
fn tests_outside_any_scope_see_nothing() {
    assert_eq!(with_current(|context| context.settings()), UntabSettings::UNSET);
    assert_eq!(untab::untab("\n\tA\n"), "\n\tA\n");
}


#[untab(depth = 1, unit = "  ")]
mod two_space_units {
    use untab::{assert_untabbed_eq, with_current};

    #[test]
    fn uses_the_configured_unit() {
        assert_eq!(with_current(|context| context.indentation_unit().as_pattern().to_string()), "  ");

        assert_untabbed_eq!("a\n  b", "\n  a\n    b\n  ");
    }
}


#[test]
#[untab(depth = 2)]
fn contains_untabs_the_needle() {
    let rendered = String::from("<ul>\n\t<li>A</li>\n</ul>");

    assert_untabbed_contains!(
        rendered,
        "
		<ul>
			<li>A</li>
		"
    );
}


#[test]
#[untab(depth = 1)]
fn custom_failure_messages_are_forwarded() {
    let result = std::panic::catch_unwind(|| {
        assert_untabbed_eq!("A", "\n\tB\n", otherwise "rendering mismatch in {}", "header");
    });

    let message = result
        .err()
        .and_then(|payload| payload.downcast_ref::<String>().cloned())
        .unwrap();

    assert!(message.contains("rendering mismatch in header"));
}
