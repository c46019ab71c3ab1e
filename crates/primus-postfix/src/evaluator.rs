//! Stack-based postfix evaluation.

use tracing::{debug, trace};

use crate::error::EvalError;
use crate::token::Token;

/// Evaluates a whitespace-separated postfix expression.
///
/// # Errors
///
/// Returns an [`EvalError`] on an unknown token, an operator without two
/// operands, division by zero, a power with no finite result, or a final stack that does not hold exactly
/// one value (including the empty expression).
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let result = run(expr);
    if let Err(e) = &result {
        debug!(expr, error = %e, "postfix evaluation failed");
    }
    result
}

fn run(expr: &str) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for tok in expr.split_whitespace() {
        trace!(token = tok, depth = stack.len(), "postfix token");
        match Token::parse(tok)? {
            Token::Number(n) => stack.push(n),
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::StackUnderflow { operator: op });
                };
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvalError::UnbalancedExpression {
            remaining: rest.len(),
        }),
    }
}

/// Evaluates an expression, reporting failure as a flag.
///
/// Returns `(value, false)` on success and `(0.0, true)` on any error.
#[must_use]
pub fn evaluate_flagged(expr: &str) -> (f64, bool) {
    match evaluate(expr) {
        Ok(value) => (value, false),
        Err(_) => (0.0, true),
    }
}
