use crate::{
    error::{NodeError, ParseError},
    interpreter::{
        expression::Expression,
        value::{Bindings, EvaluationResult, Value},
    },
};

/// Expression a new function node starts with when none is given.
pub const DEFAULT_EXPRESSION: &str = "a*sin(a^2)+cos(a*tan(a))";

/// Name a new function node starts with when none is given.
pub const DEFAULT_NAME: &str = "Function";

/// Options for creating a [`FunctionNode`].
///
/// Constructed fresh for every node; nodes never share option state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNodeOptions {
    /// Display name of the node.
    pub name:       String,
    /// The expression text.
    pub expression: String,
}

impl Default for FunctionNodeOptions {
    fn default() -> Self {
        Self { name:       DEFAULT_NAME.to_string(),
               expression: DEFAULT_EXPRESSION.to_string(), }
    }
}

impl FunctionNodeOptions {
    /// Default options with a different expression.
    #[must_use]
    pub fn with_expression(expression: &str) -> Self {
        Self { expression: expression.to_string(),
               ..Self::default() }
    }
}

/// A function node: an expression with one input per variable and one
/// output.
///
/// The host feeds input values into [`FunctionNode::process`] and forwards the
/// output downstream. Errors never leave the node in a broken state: a bad
/// expression keeps the previous one, a failed evaluation keeps the previous
/// output.
///
/// # Example
/// ```
/// use exprnode::{
///     Bindings, EvaluationResult, Value,
///     node::{FunctionNode, FunctionNodeOptions},
/// };
///
/// let mut node = FunctionNode::new(FunctionNodeOptions::with_expression("a + b"));
/// assert_eq!(node.inputs(), &['a', 'b']);
///
/// let mut inputs = Bindings::new();
/// inputs.insert('a', Value::from([1.0, 2.0, 3.0]));
/// inputs.insert('b', Value::Number(10.0));
///
/// assert_eq!(node.process(&inputs),
///            Some(&EvaluationResult::Bulk(vec![11.0, 12.0, 13.0])));
/// ```
#[derive(Debug, Clone)]
pub struct FunctionNode {
    name:       String,
    expression: Option<Expression>,
    inputs:     Vec<char>,
    output:     Option<EvaluationResult>,
}

impl FunctionNode {
    /// Creates a node and declares one input per variable of its expression.
    ///
    /// If the expression does not parse the error is logged and the node
    /// starts without an expression; a later [`Self::set_expression`] can fix
    /// it.
    #[must_use]
    pub fn new(options: FunctionNodeOptions) -> Self {
        let mut node = Self { name:       options.name,
                              expression: None,
                              inputs:     Vec::new(),
                              output:     None, };
        node.set_expression(&options.expression).ok();
        node
    }

    /// The display name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current expression, if one has parsed successfully.
    #[must_use]
    pub const fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    /// The declared variable inputs, in declaration order.
    #[must_use]
    pub fn inputs(&self) -> &[char] {
        &self.inputs
    }

    /// The last successfully computed output.
    #[must_use]
    pub const fn output(&self) -> Option<&EvaluationResult> {
        self.output.as_ref()
    }

    /// Replaces the expression.
    ///
    /// Variables referenced by the new expression that have no input yet are
    /// appended to the inputs; existing inputs are kept.
    ///
    /// # Errors
    /// Returns the `ParseError` if the text is malformed. The previous
    /// expression then stays in effect.
    pub fn set_expression(&mut self, source: &str) -> Result<(), ParseError> {
        let expression = Expression::parse(source).inspect_err(|e| {
                                                      log::error!("{}: error while parsing expression: {e}",
                                                                  self.name);
                                                  })?;

        for name in expression.variables() {
            if !self.inputs.contains(name) {
                self.inputs.push(*name);
            }
        }

        log::debug!("{}: expression set to '{source}', inputs {:?}",
                    self.name,
                    self.inputs);

        self.expression = Some(expression);
        Ok(())
    }

    /// Declares a new variable input.
    ///
    /// The name is trimmed and lowercased and must then be a single letter
    /// `a`..`z`.
    ///
    /// # Errors
    /// - `EmptyVariableName` for a blank name.
    /// - `InvalidVariableName` for anything but one letter.
    /// - `VariableExists` if the input is already declared.
    ///
    /// # Example
    /// ```
    /// use exprnode::{
    ///     error::NodeError,
    ///     node::{FunctionNode, FunctionNodeOptions},
    /// };
    ///
    /// let mut node = FunctionNode::new(FunctionNodeOptions::default());
    /// assert_eq!(node.add_variable(" Y "), Ok('y'));
    /// assert_eq!(node.add_variable("y"), Err(NodeError::VariableExists { name: 'y' }));
    /// ```
    pub fn add_variable(&mut self, name: &str) -> Result<char, NodeError> {
        let normalized = name.trim().to_lowercase();

        let mut chars = normalized.chars();
        let variable = match (chars.next(), chars.next()) {
            (None, _) => Err(NodeError::EmptyVariableName),
            (Some(c), None) if c.is_ascii_lowercase() => Ok(c),
            _ => Err(NodeError::InvalidVariableName { name: name.trim().to_string() }),
        }.inspect_err(|e| log::warn!("{}: {e}", self.name))?;

        if self.inputs.contains(&variable) {
            let error = NodeError::VariableExists { name: variable };
            log::warn!("{}: {error}", self.name);
            return Err(error);
        }

        self.inputs.push(variable);
        Ok(variable)
    }

    /// Evaluates the expression with the given input values.
    ///
    /// One binding is built per declared input; an input with no value reads
    /// as `0`. Values for names that are not inputs are ignored. On success the
    /// result becomes the node's output. On failure the error is logged and the
    /// previous output is kept.
    ///
    /// Returns the current output.
    pub fn process(&mut self, values: &Bindings) -> Option<&EvaluationResult> {
        let Some(expression) = &self.expression else {
            return self.output.as_ref();
        };

        let bindings = self.inputs
                           .iter()
                           .map(|name| (*name, values.get(name).cloned().unwrap_or_default()))
                           .collect::<Bindings>();

        match expression.evaluate(&bindings) {
            Ok(result) => self.output = Some(result),
            Err(e) => log::error!("{}: error while evaluating the expression '{expression}': {e}",
                                  self.name),
        }

        self.output.as_ref()
    }

    /// Convenience for hosts that only deal in numbers: sets every input from
    /// a slice of `(name, value)` pairs and processes.
    pub fn process_values<V>(&mut self, values: &[(char, V)]) -> Option<&EvaluationResult>
        where V: Clone + Into<Value>
    {
        let bindings = values.iter()
                             .map(|(name, value)| (*name, value.clone().into()))
                             .collect::<Bindings>();
        self.process(&bindings)
    }
}
