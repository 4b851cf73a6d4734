use std::f64::consts::PI;

use reckon::{
    ast::{BinaryOperator, Expr},
    calculate, calculate_with_limits,
    config::Limits,
    error::{CalcError, EvalError, ParseError},
    evaluate,
    interpreter::evaluator::function::core::BUILTIN_FUNCTIONS,
    parse, parse_with_limits,
};

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(v) => assert_eq!(v, expected, "{src} evaluated to {v}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_nan(src: &str) {
    match calculate(src) {
        Ok(v) => assert!(v.is_nan(), "{src} evaluated to {v}, expected NaN"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match calculate(src) {
        Err(CalcError::Parse(e)) => e,
        other => panic!("{src} should fail to parse, got {other:?}"),
    }
}

fn eval_failure(src: &str) -> EvalError {
    match calculate(src) {
        Err(CalcError::Eval(e)) => e,
        other => panic!("{src} should fail to evaluate, got {other:?}"),
    }
}

#[test]
fn precedence_follows_arithmetic_rules() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3+4", 10.0);
    assert_value("2+12/4", 5.0);
    assert_value("2*3^2", 18.0);
    assert_value("(2*3)^2", 36.0);
}

#[test]
fn left_associative_operators_group_left() {
    assert_value("10-4-3", 3.0);
    assert_value("8/2/2", 2.0);
    assert_value("2*3/4", 1.5);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2^-1", 0.5);
    assert_value("2^-1^2", 0.5);
}

#[test]
fn unary_minus_binds_between_multiplication_and_power() {
    assert_value("-2^2", -4.0);
    assert_value("(-2)^2", 4.0);
    assert_value("-2*3", -6.0);
    assert_value("2*-3", -6.0);
    assert_value("--2", 2.0);
    assert_value("1 - -1", 2.0);
    assert_value("-(1+2)", -3.0);
}

#[test]
fn builtin_functions_and_pi() {
    assert_value("sqrt(16)", 4.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("cos(pi)", -1.0);
    assert_value("log(100)", 2.0);
    assert_value("pi", PI);
    assert_value("2*pi", 2.0 * PI);
    assert_value("sqrt(sqrt(16))", 2.0);
    assert_value("sqrt(9) + log(10)", 4.0);
}

#[test]
fn every_builtin_takes_one_argument() {
    for name in BUILTIN_FUNCTIONS {
        assert!(calculate(&format!("{name}(1)")).is_ok(), "{name}(1) should evaluate");
        assert!(matches!(calculate(&format!("{name}(1, 2)")),
                         Err(CalcError::Eval(EvalError::ArityMismatch { expected: 1, .. }))));
    }
}

#[test]
fn number_literal_forms() {
    assert_value("42", 42.0);
    assert_value("3.5", 3.5);
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("1e3", 1000.0);
    assert_value("2.5E-1", 0.25);
    assert_value("  1 +\t2\n", 3.0);
}

#[test]
fn division_by_zero_follows_ieee_754() {
    assert_value("1/0", f64::INFINITY);
    assert_value("-1/0", f64::NEG_INFINITY);
    assert_nan("0/0");
}

#[test]
fn domain_errors_propagate_nan() {
    assert_nan("sqrt(-1)");
    assert_nan("log(-1)");
    assert_nan("(-8)^(1/3)");
    assert_value("log(0)", f64::NEG_INFINITY);
    assert_nan("sqrt(-1) + 1");
}

#[test]
fn unknown_function_is_unsupported() {
    assert_eq!(eval_failure("foo(1)"),
               EvalError::UnsupportedFunction { name: "foo".to_string() });
    assert_eq!(eval_failure("pi(1)"),
               EvalError::UnsupportedFunction { name: "pi".to_string() });
    assert_eq!(eval_failure("exp(1)"),
               EvalError::UnsupportedFunction { name: "exp".to_string() });
}

#[test]
fn wrong_argument_count_is_arity_mismatch() {
    assert_eq!(eval_failure("sin(1,2)"),
               EvalError::ArityMismatch { name:     "sin".to_string(),
                                          expected: 1,
                                          found:    2, });
    assert_eq!(eval_failure("sqrt()"),
               EvalError::ArityMismatch { name:     "sqrt".to_string(),
                                          expected: 1,
                                          found:    0, });
}

#[test]
fn arguments_are_evaluated_before_the_callee_is_resolved() {
    assert_eq!(eval_failure("foo(bar(1))"),
               EvalError::UnsupportedFunction { name: "bar".to_string() });
}

#[test]
fn malformed_input_is_a_parse_error() {
    assert_eq!(parse_failure("2+"),
               ParseError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(parse_failure("(2+3"),
               ParseError::ExpectedClosingParen { position: 0 });
    assert_eq!(parse_failure("2++3"),
               ParseError::UnexpectedToken { token:    "+".to_string(),
                                             position: 2, });
    assert_eq!(parse_failure(""),
               ParseError::UnexpectedEndOfInput { position: 0 });
    assert_eq!(parse_failure("2)"),
               ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                      position: 1, });
    assert!(matches!(parse_failure("2 3"),
                     ParseError::UnexpectedTrailingTokens { position: 2, .. }));
    assert!(matches!(parse_failure("2(3)"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_failure(")"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("sin(1,)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("sin(1"),
                     ParseError::ExpectedClosingParen { position: 3 }));
    assert!(matches!(parse_failure("sin(1 2)"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn constructs_outside_the_grammar_are_rejected() {
    for src in ["x = 1", "1 < 2", "2 % 3", "a; b", "__import__('os')", "[1, 2]", "1 == 1"] {
        assert!(matches!(parse_failure(src), ParseError::UnexpectedCharacter { .. }),
                "{src} should be rejected by the lexer");
    }
}

#[test]
fn bare_identifiers_other_than_pi_are_rejected() {
    assert_eq!(parse_failure("x"),
               ParseError::UnknownIdentifier { name:     "x".to_string(),
                                               position: 0, });
    assert!(matches!(parse_failure("2 * e"),
                     ParseError::UnknownIdentifier { position: 4, .. }));
    assert!(matches!(parse_failure("sin 1"), ParseError::UnknownIdentifier { .. }));
}

#[test]
fn hand_built_unknown_name_fails_at_evaluation() {
    let tree = Expr::binary(BinaryOperator::Add,
                            Expr::constant(1.0),
                            Expr::NameRef { name: "e".to_string() });
    assert_eq!(evaluate(&tree),
               Err(EvalError::UnknownName { name: "e".to_string() }));
}

#[test]
fn evaluation_is_deterministic() {
    for src in ["2+3*4", "sin(1)/cos(1)", "sqrt(-1)", "foo(1)", "2+", "pi^pi"] {
        let first = calculate(src).map(f64::to_bits);
        let second = calculate(src).map(f64::to_bits);
        assert_eq!(first, second, "{src} changed between runs");

        if let Ok(tree) = parse(src) {
            assert_eq!(evaluate(&tree).map(f64::to_bits),
                       evaluate(&tree).map(f64::to_bits));
        }
    }
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(parse(&deep), Err(ParseError::NestingTooDeep { limit: 256, .. })));

    let signs = format!("{}1", "-".repeat(1000));
    assert!(matches!(parse(&signs), Err(ParseError::NestingTooDeep { .. })));

    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(calculate(&shallow), Ok(1.0));

    let tower = format!("2{}", "^2".repeat(100));
    assert_eq!(parse(&tower).map(|tree| tree.depth()), Ok(101));
}

#[test]
fn limits_are_configurable() {
    let tight = Limits { max_depth:     3,
                         max_input_len: 16, };
    assert_eq!(calculate_with_limits("((1))", &tight), Ok(1.0));
    assert!(matches!(parse_with_limits("((((1))))", &tight),
                     Err(ParseError::NestingTooDeep { limit: 3, .. })));
    assert_eq!(parse_with_limits("1+1+1+1+1+1+1+1+1", &tight),
               Err(ParseError::InputTooLong { length: 17,
                                              limit:  16, }));

    let past_default = format!("{}1{}", "(".repeat(260), ")".repeat(260));
    assert!(parse(&past_default).is_err());
    assert_eq!(calculate_with_limits(&past_default, &Limits::unbounded()), Ok(1.0));
}

#[test]
fn long_input_is_rejected_before_lexing() {
    let long = format!("{}1", "1+".repeat(3000));
    assert!(matches!(parse(&long), Err(ParseError::InputTooLong { length: 6001, .. })));
}

#[test]
fn canonical_form_reparses_to_the_same_tree() {
    for src in ["2+3*4",
                "(2+3)*4",
                "2^3^2",
                "(2^3)^2",
                "-2^2",
                "(-2)^2",
                "2^-3",
                "-(1+2)",
                "1-(2-3)",
                "1-2-3",
                "8/(2/2)",
                "sin(pi/2)*sqrt(16)",
                "log(1e-3)",
                "--1",
                "2*-3"]
    {
        let tree = parse(src).unwrap();
        let printed = tree.to_string();
        assert_eq!(parse(&printed).unwrap(), tree, "{src} printed as {printed}");
    }
}

#[test]
fn canonical_form_drops_redundant_parentheses() {
    assert_eq!(parse("((1))+(2*3)").unwrap().to_string(), "1+2*3");
    assert_eq!(parse("1-(2-3)").unwrap().to_string(), "1-(2-3)");
    assert_eq!(parse("-(2^2)").unwrap().to_string(), "-2^2");
    assert_eq!(parse("2 - -3").unwrap().to_string(), "2--3");
    assert_eq!(parse("sin(1, 2)").unwrap().to_string(), "sin(1,2)");
    assert_eq!(parse("2 * 1000000000000000000000").unwrap().to_string(), "2*1e21");
    assert_eq!(parse("1e999").unwrap().to_string(), "1e999");
}

#[test]
fn canonical_form_of_a_long_source_fits_the_same_limits() {
    let src = format!("{}1", "1e300 * ".repeat(500));
    assert!(src.len() <= Limits::default().max_input_len);

    let tree = parse(&src).unwrap();
    let printed = tree.to_string();
    assert!(printed.len() <= src.len());
    assert_eq!(parse(&printed).unwrap(), tree);
}

#[test]
fn long_chains_print_on_a_spawned_thread() {
    let src = format!("{}1", "1*".repeat(2040));
    let mixed = format!("{}1", "1-2+".repeat(1020));

    let printed = std::thread::spawn(move || {
                      (parse(&src).unwrap().to_string() == src,
                       parse(&mixed).unwrap().to_string() == mixed)
                  }).join()
                    .unwrap();
    assert_eq!(printed, (true, true));
}

#[test]
fn errors_render_with_positions() {
    let err = calculate("2 + #").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected character '#' at position 4.");

    assert_eq!(parse("(1 + 2").unwrap_err().position(), 0);
    assert_eq!(parse("1 + 2 )").unwrap_err().position(), 6);

    let err = calculate("sin(1,2)").unwrap_err();
    assert_eq!(err.to_string(),
               "Function 'sin' takes 1 argument(s) but 2 were supplied.");
}

#[test]
fn concurrent_callers_share_nothing() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        let src = format!("{i} * 2 + sqrt(16)");
                                        (0..100).map(|_| calculate(&src))
                                                .all(|r| r == Ok(f64::from(i) * 2.0 + 4.0))
                                    })
                                })
                                .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
