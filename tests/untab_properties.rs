//! Property-based tests for untabbing:
//! - at most `depth` units are removed from each line,
//! - untabbing twice equals untabbing once with the summed depth,
//! - trimming never touches interior lines,
//! - line terminators survive untabbing and nothing panics,
//! - non-string values pass through unchanged.

use std::borrow::Cow;

use proptest::prelude::*;
use untab::{untab_str, IndentationUnit, Untab, UntabSettings};



/// A line made of some leading tabs followed by content that does not start with a tab.
fn indented_line() -> impl Strategy<Value = (usize, String)> {
    (0usize..6, "([a-z][a-z \t]{0,7})?")
}

fn join_lines(lines: &[(usize, String)]) -> String {
    lines
        .iter()
        .map(|(tabs, content)| format!("{}{}", "\t".repeat(*tabs), content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn untabbed(input: &str, depth: usize, trim: bool) -> String {
    untab_str(input, &IndentationUnit::tab(), UntabSettings::new(Some(depth), trim)).into_owned()
}


proptest! {
    #[test]
    fn removes_at_most_depth_units_per_line(
        lines in prop::collection::vec(indented_line(), 1..8),
        depth in 0usize..8,
    ) {
        let output = untabbed(&join_lines(&lines), depth, false);
        let output_lines: Vec<&str> = output.split('\n').collect();

        prop_assert_eq!(output_lines.len(), lines.len());

        for ((tabs, content), output_line) in lines.iter().zip(output_lines) {
            let expected = format!("{}{}", "\t".repeat(tabs.saturating_sub(depth)), content);
            prop_assert_eq!(output_line, expected.as_str());
        }
    }

    #[test]
    fn untabbing_twice_adds_up_the_depths(
        lines in prop::collection::vec(indented_line(), 1..8),
        first_depth in 0usize..4,
        second_depth in 0usize..4,
    ) {
        let input = join_lines(&lines);

        let twice = untabbed(&untabbed(&input, first_depth, false), second_depth, false);
        let once = untabbed(&input, first_depth + second_depth, false);

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn unindented_input_is_returned_as_is(
        contents in prop::collection::vec("([a-z][a-z \t]{0,7})?", 1..8),
        depth in 1usize..8,
    ) {
        let input = contents.join("\n");
        let output = untab_str(&input, &IndentationUnit::tab(), UntabSettings::new(Some(depth), false));

        prop_assert!(matches!(output, Cow::Borrowed(_)));
        prop_assert_eq!(output.as_ref(), input.as_str());
    }

    #[test]
    fn trimming_leaves_interior_lines_alone(
        leading_blank_lines in prop::collection::vec("[ \t]{0,3}", 0..3),
        lines in prop::collection::vec(indented_line(), 1..6),
        trailing_indentation in "[ \t]{0,3}",
        depth in 0usize..4,
    ) {
        let last = lines.len() - 1;
        prop_assume!(!lines[0].1.trim().is_empty());
        prop_assume!(!lines[last].1.trim().is_empty());

        let body = join_lines(&lines);

        let mut input = String::new();
        for blank_line in &leading_blank_lines {
            input.push_str(blank_line);
            input.push('\n');
        }
        input.push_str(&body);
        input.push('\n');
        input.push_str(&trailing_indentation);

        prop_assert_eq!(untabbed(&input, depth, true), untabbed(&body, depth, false));
    }

    #[test]
    fn never_panics_on_arbitrary_strings(
        input in r"(?s).{0,64}|[ \t\r\na\x{2028}]{0,64}",
        depth in 0usize..8,
        trim in any::<bool>(),
    ) {
        let _ = untabbed(&input, depth, trim);
    }

    #[test]
    fn line_count_is_preserved_without_trimming(
        input in r"[ \t\r\na\x{2028}]{0,64}",
        depth in 0usize..8,
    ) {
        let is_terminator = |character: char| matches!(character, '\n' | '\r' | '\u{2028}' | '\u{2029}');

        let output = untabbed(&input, depth, false);

        prop_assert_eq!(
            output.chars().filter(|character| is_terminator(*character)).count(),
            input.chars().filter(|character| is_terminator(*character)).count()
        );
    }

    #[test]
    fn non_strings_pass_through(
        number in any::<i64>(),
        maybe_number in any::<Option<u32>>(),
        flag in any::<bool>(),
        depth in 0usize..8,
    ) {
        let settings = UntabSettings::new(Some(depth), true);
        let unit = IndentationUnit::tab();

        prop_assert_eq!(number.untab_with(&unit, settings), number);
        prop_assert_eq!(maybe_number.untab_with(&unit, settings), maybe_number);
        prop_assert_eq!(flag.untab_with(&unit, settings), flag);
    }
}
