use exprnode::{
    Bindings, Error, EvaluationError, EvaluationResult, Expression, TokenKind, Value,
    ast::Expr,
    error::ParseErrorKind,
    evaluate,
    interpreter::parser::core::MAX_NESTING_DEPTH,
    parse,
};

fn bindings(values: &[(char, Value)]) -> Bindings {
    values.iter().cloned().collect()
}

fn scalar(src: &str) -> f64 {
    scalar_with(src, &Bindings::new())
}

fn result_with(src: &str, bindings: &Bindings) -> EvaluationResult {
    evaluate(src, bindings).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn scalar_with(src: &str, bindings: &Bindings) -> f64 {
    let result = result_with(src, bindings);
    result.as_scalar()
          .unwrap_or_else(|| panic!("Expected a scalar from '{src}', got {result}"))
}

fn bulk_with(src: &str, bindings: &Bindings) -> Vec<f64> {
    let result = result_with(src, bindings);
    result.as_bulk()
          .map(<[f64]>::to_vec)
          .unwrap_or_else(|| panic!("Expected a bulk result from '{src}', got {result}"))
}

fn parse_error(src: &str) -> ParseErrorKind {
    match parse(src) {
        Ok(tokens) => panic!("'{src}' parsed into {} tokens but was expected to fail",
                             tokens.len()),
        Err(e) => e.kind,
    }
}

fn evaluation_error(src: &str, bindings: &Bindings) -> EvaluationError {
    match evaluate(src, bindings) {
        Err(Error::Evaluation(e)) => e,
        other => panic!("Expected an evaluation error from '{src}', got {other:?}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}");
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(scalar("2+3*4"), 14.0);
    assert_eq!(scalar("(2+3)*4"), 20.0);
    assert_eq!(scalar("2^3^2"), 512.0);
    assert_eq!(scalar("2-3-4"), -5.0);
    assert_eq!(scalar("8/4/2"), 1.0);
    assert_eq!(scalar("1 + 2 * 3 ^ 2"), 19.0);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_eq!(scalar("-2^2"), -4.0);
    assert_eq!(scalar("(-2)^2"), 4.0);
    assert_eq!(scalar("2^-1"), 0.5);
    assert_eq!(scalar("-2*3"), -6.0);
    assert_eq!(scalar("3--2"), 5.0);
    assert_eq!(scalar("--4"), 4.0);
}

#[test]
fn numbers() {
    assert_eq!(scalar("42"), 42.0);
    assert_eq!(scalar("3.25"), 3.25);
    assert_eq!(scalar(".5"), 0.5);
    assert_eq!(scalar("2e3"), 2000.0);
}

#[test]
fn division_follows_ieee() {
    assert_eq!(scalar("1/0"), f64::INFINITY);
    assert_eq!(scalar("-1/0"), f64::NEG_INFINITY);
    assert!(scalar("0/0").is_nan());
}

#[test]
fn single_argument_functions() {
    let zero = bindings(&[('a', Value::Number(0.0))]);
    assert_eq!(scalar_with("sin(a)", &zero), 0.0);
    assert_eq!(scalar_with("cos(a)", &zero), 1.0);

    assert_eq!(scalar("sqrt(16)"), 4.0);
    assert_eq!(scalar("abs(-3)"), 3.0);
    assert_close(scalar("log(1000)"), 3.0);
    assert_eq!(scalar("ln(1)"), 0.0);
    assert_eq!(scalar("floor(2.7) + ceil(2.1)"), 5.0);
    assert_eq!(scalar("sign(-5) + sign(0) + sign(7)"), 0.0);
    assert_close(scalar("sin(1)^2 + cos(1)^2"), 1.0);
}

#[test]
fn multi_argument_functions() {
    assert_eq!(scalar("max(1, 5, 3)"), 5.0);
    assert_eq!(scalar("min(4, -2, 9)"), -2.0);
    assert_eq!(scalar("pow(2, 10)"), 1024.0);
    assert_eq!(scalar("hypot(3, 4)"), 5.0);
    assert_eq!(scalar("avg(1, 2, 3, 6)"), 3.0);
    assert_eq!(scalar("clamp(5, 0, 3)"), 3.0);
    assert_eq!(scalar("clamp(-1, 0, 3)"), 0.0);
    assert_close(scalar("atan2(1, 1)"), std::f64::consts::FRAC_PI_4);
}

#[test]
fn unbound_variables_are_zero() {
    assert_eq!(scalar("a + 1"), 1.0);
    assert_eq!(scalar("x * 5 + y"), 0.0);
}

#[test]
fn default_expression_evaluates() {
    let a = 0.5_f64;
    let expected = a * (a * a).sin() + (a * a.tan()).cos();
    let b = bindings(&[('a', Value::Number(a))]);

    assert_close(scalar_with("a*sin(a^2)+cos(a*tan(a))", &b), expected);
}

#[test]
fn bulk_evaluation() {
    let b = bindings(&[('a', Value::from([1.0, 2.0, 3.0]))]);
    assert_eq!(bulk_with("a+1", &b), vec![2.0, 3.0, 4.0]);
    assert_eq!(bulk_with("a*a", &b), vec![1.0, 4.0, 9.0]);

    let b = bindings(&[('a', Value::from([1.0, 2.0])), ('k', Value::Number(10.0))]);
    assert_eq!(bulk_with("a*k", &b), vec![10.0, 20.0]);
}

#[test]
fn bulk_evaluation_through_single_argument_functions() {
    let b = bindings(&[('t', Value::from([0.0, 4.0, 9.0]))]);
    assert_eq!(bulk_with("sqrt(t)", &b), vec![0.0, 2.0, 3.0]);
    assert_eq!(bulk_with("sqrt(t) + t", &b), vec![0.0, 6.0, 12.0]);
}

#[test]
fn sole_argument_of_multi_argument_function_spreads() {
    let b = bindings(&[('v', Value::from([1.0, 5.0, 3.0]))]);
    assert_eq!(scalar_with("max(v)", &b), 5.0);
    assert_eq!(scalar_with("min(v) + max(v)", &b), 6.0);

    let b = bindings(&[('p', Value::from([2.0, 3.0]))]);
    assert_eq!(scalar_with("pow(p)", &b), 8.0);
}

#[test]
fn array_sharing_an_argument_list_is_bulk() {
    let b = bindings(&[('v', Value::from([1.0, 5.0, 3.0]))]);
    assert_eq!(bulk_with("max(v, 4)", &b), vec![4.0, 5.0, 4.0]);
}

#[test]
fn array_used_as_number_outside_bulk_mode() {
    // `max(v)` keeps `v` out of bulk mode, so the bare `v` has no index.
    let b = bindings(&[('v', Value::from([1.0, 2.0]))]);
    assert_eq!(evaluation_error("v + max(v)", &b),
               EvaluationError::ExpectedNumber { name:   'v',
                                                 offset: 0, });
}

#[test]
fn bulk_mode_is_decided_per_call() {
    let expression = Expression::parse("a * 2").unwrap();

    let b = bindings(&[('a', Value::Number(3.0))]);
    assert_eq!(expression.evaluate(&b).unwrap(), EvaluationResult::Scalar(6.0));

    let b = bindings(&[('a', Value::from([1.0, 2.0]))]);
    assert_eq!(expression.evaluate(&b).unwrap(), EvaluationResult::Bulk(vec![2.0, 4.0]));

    let b = bindings(&[('a', Value::Number(-1.0))]);
    assert_eq!(expression.evaluate(&b).unwrap(), EvaluationResult::Scalar(-2.0));
}

#[test]
fn bulk_runs_over_the_longest_array() {
    let b = bindings(&[('a', Value::from([1.0, 2.0, 3.0])), ('b', Value::from([1.0]))]);
    assert_eq!(evaluation_error("a+b", &b),
               EvaluationError::IndexOutOfRange { name:   'b',
                                                  index:  1,
                                                  length: 1,
                                                  offset: 2, });

    let b = bindings(&[('a', Value::from([1.0, 2.0])), ('b', Value::from([10.0, 20.0]))]);
    assert_eq!(bulk_with("a+b", &b), vec![11.0, 22.0]);
}

#[test]
fn empty_array_gives_empty_bulk_result() {
    let b = bindings(&[('a', Value::Array(Vec::new()))]);
    assert_eq!(bulk_with("a+1", &b), Vec::<f64>::new());
}

#[test]
fn arrays_not_referenced_are_ignored() {
    let b = bindings(&[('z', Value::from([1.0, 2.0, 3.0]))]);
    assert_eq!(scalar_with("1+1", &b), 2.0);
}

#[test]
fn evaluation_is_idempotent() {
    let b = bindings(&[('a', Value::from([0.5, 1.5])), ('b', Value::Number(2.0))]);
    let first = evaluate("a*sin(a^2)+cos(a*tan(b))", &b);
    let second = evaluate("a*sin(a^2)+cos(a*tan(b))", &b);
    assert_eq!(first, second);
}

#[test]
fn parsing_is_stable() {
    let src = "max(a, 2) * -sin(b) ^ 2";
    assert_eq!(parse(src).unwrap(), parse(src).unwrap());
}

#[test]
fn tokens_carry_kind_text_and_offset() {
    let tokens = parse("max(a, 2.5)").unwrap();
    let kinds = tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>();

    assert_eq!(kinds,
               vec![TokenKind::Function("max".to_string()),
                    TokenKind::LeftParen,
                    TokenKind::Variable('a'),
                    TokenKind::Comma,
                    TokenKind::Number(2.5),
                    TokenKind::RightParen]);
    assert_eq!(tokens[4].text, "2.5");
    assert_eq!(tokens[4].offset, 7);
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_error("sin(a"), ParseErrorKind::ExpectedClosingParen { offset: 3 });
    assert_eq!(parse_error("(1+2"), ParseErrorKind::ExpectedClosingParen { offset: 0 });
    assert_eq!(parse_error("a)"), ParseErrorKind::UnmatchedClosingParen { offset: 1 });
}

#[test]
fn invalid_identifiers() {
    assert_eq!(parse_error("ab+1"),
               ParseErrorKind::InvalidIdentifier { name:   "ab".to_string(),
                                                   offset: 0, });
    assert_eq!(parse_error("2*A"),
               ParseErrorKind::InvalidIdentifier { name:   "A".to_string(),
                                                   offset: 2, });
}

#[test]
fn unexpected_characters() {
    assert_eq!(parse_error("a $ b"),
               ParseErrorKind::UnexpectedCharacter { token:  "$".to_string(),
                                                     offset: 2, });
}

#[test]
fn missing_operands() {
    assert_eq!(parse_error("2+"), ParseErrorKind::UnexpectedEndOfInput { offset: 2 });
    assert_eq!(parse_error("max(a, -"), ParseErrorKind::ExpectedClosingParen { offset: 3 });
    assert_eq!(parse_error("3 * -  "), ParseErrorKind::UnexpectedEndOfInput { offset: 5 });
    assert_eq!(parse_error("*3"),
               ParseErrorKind::UnexpectedToken { token:  "*".to_string(),
                                                 offset: 0, });
    assert_eq!(parse_error("max(1,)"),
               ParseErrorKind::UnexpectedToken { token:  ")".to_string(),
                                                 offset: 6, });
    assert_eq!(parse_error("1 2"),
               ParseErrorKind::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                          offset: 2, });
}

#[test]
fn function_arity_by_class() {
    assert!(matches!(parse_error("sin(a, b)"),
                     ParseErrorKind::ArityMismatch { found: 2, .. }));
    assert!(matches!(parse_error("sin()"),
                     ParseErrorKind::ArityMismatch { found: 0, .. }));
    assert!(matches!(parse_error("max()"),
                     ParseErrorKind::ArityMismatch { found: 0, .. }));
    assert!(matches!(parse_error("clamp(1, 2, 3, 4)"),
                     ParseErrorKind::ArityMismatch { found: 4, .. }));
    assert_eq!(parse_error("sin + 1"),
               ParseErrorKind::ExpectedArguments { name:   "sin".to_string(),
                                                   offset: 0, });
}

#[test]
fn argument_count_is_checked_after_spreading() {
    let b = bindings(&[('a', Value::Number(2.0))]);
    assert_eq!(evaluation_error("pow(a)", &b),
               EvaluationError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                        expected: "exactly 2".to_string(),
                                                        found:    1,
                                                        offset:   0, });

    let b = bindings(&[('v', Value::Array(Vec::new()))]);
    assert_eq!(evaluation_error("max(v)", &b),
               EvaluationError::MissingOperand { name:   "max".to_string(),
                                                 offset: 0, });
}

#[test]
fn unknown_function() {
    let b = bindings(&[('a', Value::Number(1.0))]);
    assert_eq!(evaluation_error("foo(a)", &b),
               EvaluationError::UnknownFunction { name:   "foo".to_string(),
                                                  offset: 0, });

    // Reported even when bulk mode runs zero iterations.
    let b = bindings(&[('a', Value::Array(Vec::new()))]);
    assert_eq!(evaluation_error("a + foo(1)", &b),
               EvaluationError::UnknownFunction { name:   "foo".to_string(),
                                                  offset: 4, });
}

#[test]
fn errors_are_tagged_by_phase() {
    assert!(matches!(evaluate("sin(", &Bindings::new()), Err(Error::Parse(_))));
    assert!(matches!(evaluate("bar(1)", &Bindings::new()), Err(Error::Evaluation(_))));
}

#[test]
fn parse_error_message_names_the_expression() {
    let message = parse("1 + ab").unwrap_err().to_string();
    assert!(message.contains("'ab'"), "{message}");
    assert!(message.contains("'1 + ab'"), "{message}");
}

#[test]
fn expression_lists_its_variables() {
    let expression = Expression::parse("b*sin(a) + a + max(c, 1)").unwrap();
    assert_eq!(expression.variables().iter().copied().collect::<Vec<_>>(),
               vec!['a', 'b', 'c']);
}

#[test]
fn bulk_results_display_as_lists() {
    assert_eq!(EvaluationResult::Bulk(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
    assert_eq!(EvaluationResult::Scalar(3.0).to_string(), "3");
}

#[test]
fn evaluation_errors_point_at_the_call() {
    let b = bindings(&[('v', Value::from([1.0, 2.0]))]);
    let error = evaluation_error("1 + 2 * max(v) - v", &b);

    assert_eq!(error.offset(), 17);
    assert!(error.to_string().contains("at 17"), "{error}");
    assert_eq!(evaluation_error("sin(1) + clamp(v)", &b).offset(), 9);
}

#[test]
fn tree_nodes_carry_offsets() {
    let expression = Expression::parse("a + sin(b) * 2").unwrap();
    let Expr::BinaryOp { right, .. } = expression.tree() else {
        panic!("expected a binary operation, got {:?}", expression.tree());
    };

    assert_eq!(expression.tree().offset(), 2);
    assert_eq!(right.offset(), 11);
    let Expr::BinaryOp { left, .. } = &**right else {
        panic!("expected a binary operation, got {right:?}");
    };
    assert_eq!(left.offset(), 4);
}

#[test]
fn values_report_their_length() {
    assert_eq!(Value::Number(1.0).len(), None);
    assert_eq!(Value::from([1.0, 2.0]).len(), Some(2));
    assert!(Value::Array(Vec::new()).is_empty());
    assert!(!Value::Number(0.0).is_empty());
    assert_eq!(EvaluationResult::Scalar(1.0).as_bulk(), None);
    assert_eq!(EvaluationResult::Bulk(vec![1.0]).as_scalar(), None);
}

#[test]
fn nesting_within_the_limit_parses() {
    let depth = MAX_NESTING_DEPTH - 1;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(scalar(&src), 1.0);

    let src = format!("{}2", "-".repeat(depth));
    assert_eq!(scalar(&src), -2.0);
}

#[test]
fn deep_parentheses_are_rejected() {
    for depth in [MAX_NESTING_DEPTH + 1, 400, 10_000] {
        let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_error(&src),
                   ParseErrorKind::NestingTooDeep { offset: MAX_NESTING_DEPTH });
    }

    let src = format!("{}1{}", "sin(".repeat(1000), ")".repeat(1000));
    assert!(matches!(parse_error(&src), ParseErrorKind::NestingTooDeep { .. }));
}

#[test]
fn deep_signs_and_chains_are_rejected() {
    let src = format!("{}1", "-".repeat(5000));
    assert_eq!(parse_error(&src),
               ParseErrorKind::NestingTooDeep { offset: MAX_NESTING_DEPTH });

    let src = format!("2{}", "^2".repeat(5000));
    assert!(matches!(parse_error(&src), ParseErrorKind::NestingTooDeep { .. }));

    let src = format!("1{}", "+1".repeat(100_000));
    assert!(matches!(parse_error(&src), ParseErrorKind::NestingTooDeep { .. }));

    let message = evaluate(&src, &Bindings::new()).unwrap_err().to_string();
    assert!(message.contains("nests too deeply"), "{message}");
}
