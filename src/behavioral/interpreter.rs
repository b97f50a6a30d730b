// Interpreter: postfix arithmetic ("4 6 + 3 -") parsed into an expression
// tree, then evaluated by asking the root to interpret itself.

use crate::error::{PatternError, Result};
use crate::transcript::Transcript;

pub trait Expression {
    fn interpret(&self) -> f64;
}

pub struct NumberExpression(pub f64);

impl Expression for NumberExpression {
    fn interpret(&self) -> f64 {
        self.0
    }
}

pub struct AddExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl AddExpression {
    pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for AddExpression {
    fn interpret(&self) -> f64 {
        self.left.interpret() + self.right.interpret()
    }
}

pub struct SubtractExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl SubtractExpression {
    pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for SubtractExpression {
    fn interpret(&self) -> f64 {
        self.left.interpret() - self.right.interpret()
    }
}

/// Deepest operator nesting accepted by [`parse_expression`]. Evaluation and
/// drop both recurse once per level.
pub const MAX_DEPTH: usize = 1024;

/// Parses a whitespace separated postfix expression over `+` and `-`.
pub fn parse_expression(expression: &str) -> Result<Box<dyn Expression>> {
    // Each entry carries the depth of the subtree it holds.
    let mut stack: Vec<(Box<dyn Expression>, usize)> = Vec::new();

    for token in expression.split_whitespace() {
        match token {
            "+" | "-" => {
                let (Some((right, rd)), Some((left, ld))) = (stack.pop(), stack.pop()) else {
                    return Err(PatternError::malformed(
                        expression,
                        format!("operator '{token}' needs two operands"),
                    ));
                };
                let depth = ld.max(rd) + 1;
                if depth > MAX_DEPTH {
                    return Err(PatternError::malformed(
                        expression,
                        format!("expression nested deeper than {MAX_DEPTH} levels"),
                    ));
                }
                let node: Box<dyn Expression> = if token == "+" {
                    Box::new(AddExpression::new(left, right))
                } else {
                    Box::new(SubtractExpression::new(left, right))
                };
                stack.push((node, depth));
            }
            _ => match token.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    stack.push((Box::new(NumberExpression(value)), 0))
                }
                _ => {
                    return Err(PatternError::malformed(
                        expression,
                        format!("unknown token '{token}'"),
                    ))
                }
            },
        }
    }

    let (root, _) = stack
        .pop()
        .ok_or_else(|| PatternError::malformed(expression, "empty expression"))?;
    if !stack.is_empty() {
        return Err(PatternError::malformed(
            expression,
            format!("{} operand(s) left over", stack.len()),
        ));
    }
    Ok(root)
}

pub fn demo() -> Transcript {
    ["2 3 +", "5 1 -", "4 6 + 3 -"]
        .into_iter()
        .map(|source| match parse_expression(source) {
            Ok(expr) => expr.interpret().to_string(),
            Err(err) => format!("Error: {err}"),
        })
        .collect()
}
