use assert_matches::assert_matches;
use untab::{error::UntabError, IndentationUnit, UntabContext, UntabSettings};
use untab_test_harness::prelude::*;



#[test]
fn invalid_patterns_are_rejected() {
    let result = IndentationUnit::pattern("(\t");

    assert_matches!(
        result,
        Err(UntabError::InvalidIndentationPattern { pattern, .. }) if pattern == "(\t"
    );
}


#[test]
fn empty_patterns_are_rejected() {
    assert_matches!(IndentationUnit::pattern(""), Err(UntabError::EmptyIndentationPattern));
    assert_matches!(IndentationUnit::literal(""), Err(UntabError::EmptyIndentationPattern));
}


#[test]
fn patterns_parse_from_strings() -> TestResult {
    let unit: IndentationUnit = "(?:\t|    )".parse()?;

    let mut context = UntabContext::with_indentation_unit(unit);
    context.set_scope(Some(2), true);

    assert_eq!(context.transform("\n\t    A\n\t\t\tB\n"), "A\n\tB");

    Ok(())
}


#[test]
fn pattern_errors_convert_into_test_errors() {
    let result: TestResult<IndentationUnit> = "[\t".parse::<IndentationUnit>().map_err(TestError::from);

    assert_matches!(
        result,
        Err(TestError::UntabError(UntabError::InvalidIndentationPattern { .. }))
    );
}


#[test]
fn a_unit_set_on_the_context_applies_to_later_transforms() {
    let mut context = UntabContext::new();
    context.apply(UntabSettings::new(Some(1), false));

    assert_eq!(context.transform("  A"), "  A");

    context.set_indentation_unit(IndentationUnit::literal("  ").unwrap());
    assert_eq!(context.transform("    A"), "  A");

    context.reset();
    assert_eq!(context.indentation_unit().as_pattern(), "  ");
}


#[test]
fn units_never_match_across_line_feeds() {
    let mut context = UntabContext::with_indentation_unit(IndentationUnit::pattern(r"\s").unwrap());
    context.set_scope(Some(3), false);

    assert_eq!(context.transform("A\n\nB\n C"), "A\n\nB\nC");
}


#[test]
fn zero_width_units_strip_nothing() {
    let mut context = UntabContext::with_indentation_unit(IndentationUnit::pattern("\t*").unwrap());
    context.set_scope(Some(2), false);

    assert_eq!(context.transform("\t\tA\nB"), "A\nB");
    assert_eq!(context.transform("B"), "B");
}
