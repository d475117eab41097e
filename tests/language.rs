use calctree::{
    CompilationError, evaluate_str,
    interpreter::{lexer::tokenize, parser::core::build_tree, printer::render, value::Value},
    run,
};
use rstest::rstest;

fn assert_value(src: &str, expected: Value) {
    match evaluate_str(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CompilationError {
    match evaluate_str(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[rstest]
#[case::precedence("2+3*4", 14)]
#[case::left_associative_subtraction("8-3-2", 3)]
#[case::long_subtraction_run("8-3-2-1", 2)]
#[case::brackets_override_precedence("(2+3)*4", 20)]
#[case::nested_brackets("((1 + 2) * (3 + 4)) - 1", 20)]
#[case::whitespace_is_ignored("  1 +\t2  ", 3)]
#[case::lone_number("42", 42)]
#[case::redundant_brackets("((42))", 42)]
#[case::leading_zeros("007 * 2", 14)]
#[case::negative_result("3 - 10", -7)]
fn integer_expressions(#[case] src: &str, #[case] expected: i64) {
    assert_value(src, Value::Integer(expected));
}

#[rstest]
#[case::exact_quotient("6/3", 2.0)]
#[case::fractional_quotient("7/2", 3.5)]
#[case::left_associative_division("8/4/2", 1.0)]
#[case::mixed_with_multiplication("8/4*2", 4.0)]
#[case::real_promotes_following_terms("1/2 + 1", 1.5)]
fn division_yields_reals(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, Value::Real(expected));
}

#[rstest]
#[case::closing_before_opening(")(")]
#[case::only_closing(")")]
#[case::extra_closing("(1 + 2))")]
fn unmatched_closing_bracket(#[case] src: &str) {
    assert!(matches!(assert_failure(src), CompilationError::UnmatchedClosingBracket { .. }));
}

#[rstest]
#[case::only_opening("(")]
#[case::missing_closing("(1 + (2 * 3)")]
fn unclosed_bracket(#[case] src: &str) {
    assert!(matches!(assert_failure(src), CompilationError::UnclosedBracket { .. }));
}

#[rstest]
#[case::unary_plus("+5")]
#[case::trailing_plus("5+")]
#[case::lone_operator("*")]
#[case::unary_minus("-3 + 1")]
#[case::dangling_inside_brackets("(4 *) + 1")]
fn missing_operand(#[case] src: &str) {
    assert!(matches!(assert_failure(src), CompilationError::MissingOperand { .. }));
}

#[rstest]
#[case::empty_input("", 0)]
#[case::adjacent_numbers("1 2", 2)]
#[case::empty_brackets("()", 0)]
#[case::adjacent_in_brackets("(1 2) * 3", 2)]
fn wrong_arity_surfaces_at_evaluation(#[case] src: &str, #[case] found: usize) {
    assert_eq!(assert_failure(src), CompilationError::InvalidArity { found });
}

#[test]
fn unknown_character_is_named() {
    let err = assert_failure("5&3");
    assert_eq!(err,
               CompilationError::UnknownCharacter { character: '&',
                                                    position:  1, });
    assert!(err.to_string().contains('&'));
}

#[test]
fn arithmetic_failures() {
    assert_eq!(assert_failure("1 / 0"), CompilationError::DivisionByZero);
    assert_eq!(assert_failure("1 / (2 - 2)"), CompilationError::DivisionByZero);
    assert_eq!(assert_failure("9223372036854775807 + 1"),
               CompilationError::Overflow { operator: '+' });
    assert!(matches!(assert_failure("99999999999999999999"),
                     CompilationError::LiteralTooLarge { .. }));
}

#[test]
fn token_sources_rebuild_the_input() {
    let input = " (12 + 003) *\t4 / (5-6) ";
    let rebuilt: String = tokenize(input).unwrap().iter().map(|t| t.source(input)).collect();
    let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(rebuilt, expected);
}

#[test]
fn run_renders_the_tree_before_evaluating() {
    let outcome = run("1 + 2 * 3").unwrap();

    let expected = "\
[
    [
        1
        +
        [
            2
            *
            3
        ]
    ]
]
";
    assert_eq!(outcome.tree, expected);
    assert_eq!(outcome.value, Value::Integer(7));
}

#[test]
fn rendering_the_same_tree_twice_is_identical() {
    let tree = build_tree(tokenize("(1 - 2) / (3 + 4 * 5)").unwrap()).unwrap();
    assert_eq!(render(&tree), render(&tree));
}
