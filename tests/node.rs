use exprnode::{
    Bindings, EvaluationResult, Value,
    error::NodeError,
    node::{DEFAULT_EXPRESSION, DEFAULT_NAME, FunctionNode, FunctionNodeOptions},
};

fn inputs(values: &[(char, Value)]) -> Bindings {
    values.iter().cloned().collect()
}

#[test]
fn default_node() {
    let node = FunctionNode::new(FunctionNodeOptions::default());

    assert_eq!(node.name(), DEFAULT_NAME);
    assert_eq!(node.expression().map(ToString::to_string).as_deref(),
               Some(DEFAULT_EXPRESSION));
    assert_eq!(node.inputs(), &['a']);
    assert_eq!(node.output(), None);
}

#[test]
fn options_are_independent() {
    let mut first = FunctionNodeOptions::default();
    first.name = "First".to_string();
    let second = FunctionNodeOptions::default();

    assert_eq!(second.name, DEFAULT_NAME);
    assert_ne!(first, second);
}

#[test]
fn process_scalar_and_bulk() {
    let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("a * 2 + b"));
    assert_eq!(node.inputs(), &['a', 'b']);

    let result = node.process(&inputs(&[('a', Value::Number(3.0)), ('b', Value::Number(1.0))]));
    assert_eq!(result, Some(&EvaluationResult::Scalar(7.0)));

    let result = node.process(&inputs(&[('a', Value::from([1.0, 2.0]))]));
    assert_eq!(result, Some(&EvaluationResult::Bulk(vec![2.0, 4.0])));
}

#[test]
fn values_for_undeclared_inputs_are_ignored() {
    let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("a + 1"));

    let result = node.process(&inputs(&[('z', Value::from([1.0, 2.0, 3.0]))]));
    assert_eq!(result, Some(&EvaluationResult::Scalar(1.0)));
}

#[test]
fn bad_expression_keeps_the_previous_one() {
    let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("a + 1"));

    assert!(node.set_expression("a +").is_err());
    assert_eq!(node.expression().map(|e| e.source()), Some("a + 1"));
    assert_eq!(node.process_values(&[('a', 1.0)]), Some(&EvaluationResult::Scalar(2.0)));
}

#[test]
fn bad_initial_expression_leaves_node_empty() {
    let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("sin(a"));

    assert!(node.expression().is_none());
    assert!(node.inputs().is_empty());
    assert_eq!(node.process_values(&[('a', 1.0)]), None);

    node.set_expression("a - 1").unwrap();
    assert_eq!(node.process_values(&[('a', 1.0)]), Some(&EvaluationResult::Scalar(0.0)));
}

#[test]
fn new_expression_appends_inputs() {
    let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("b"));
    node.set_expression("a + c + b").unwrap();

    assert_eq!(node.inputs(), &['b', 'a', 'c']);
}

#[test]
fn add_variable_normalizes_and_validates() {
    let mut node = FunctionNode::new(FunctionNodeOptions::default());

    assert_eq!(node.add_variable("X"), Ok('x'));
    assert_eq!(node.inputs(), &['a', 'x']);

    assert_eq!(node.add_variable("a"), Err(NodeError::VariableExists { name: 'a' }));
    assert_eq!(node.add_variable("   "), Err(NodeError::EmptyVariableName));
    assert_eq!(node.add_variable("ab"),
               Err(NodeError::InvalidVariableName { name: "ab".to_string() }));
    assert_eq!(node.add_variable("1"),
               Err(NodeError::InvalidVariableName { name: "1".to_string() }));
    assert_eq!(node.inputs(), &['a', 'x']);
}

#[test]
fn evaluation_error_keeps_last_output() {
    let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("a + b"));

    let good = node.process_values(&[('a', 1.0), ('b', 2.0)]).cloned();
    assert_eq!(good, Some(EvaluationResult::Scalar(3.0)));

    // `b` runs out after the first element.
    let result = node.process(&inputs(&[('a', Value::from([1.0, 2.0])),
                                        ('b', Value::from([1.0]))]));
    assert_eq!(result, good.as_ref());

    node.set_expression("foo(a)").unwrap();
    assert_eq!(node.process_values(&[('a', 1.0)]), good.as_ref());
}

#[test]
fn output_can_feed_another_node() {
    let mut first = FunctionNode::new(FunctionNodeOptions::with_expression("a * a"));
    let mut second = FunctionNode::new(FunctionNodeOptions::with_expression("max(a)"));

    let squares = first.process_values(&[('a', Value::from([1.0, -3.0, 2.0]))])
                       .cloned()
                       .unwrap();
    let result = second.process_values(&[('a', Value::from(squares))]);

    assert_eq!(result, Some(&EvaluationResult::Scalar(9.0)));
}
