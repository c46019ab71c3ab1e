//! Errors raised while evaluating postfix expressions.

use thiserror::Error;

use crate::token::Operator;

/// Errors that can occur during postfix evaluation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// A token is neither a number nor a supported operator.
    #[error("invalid token: {0:?}")]
    InvalidToken(String),

    /// An operator found fewer than two operands on the stack.
    #[error("operator '{operator}' needs two operands")]
    StackUnderflow {
        /// The operator being applied.
        operator: Operator,
    },

    /// The right operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Exponentiation of finite operands produced no finite value.
    #[error("{base} ^ {exponent} has no finite result")]
    InvalidPower {
        /// Left operand.
        base: f64,
        /// Right operand.
        exponent: f64,
    },

    /// Evaluation finished without exactly one value on the stack.
    #[error("expression left {remaining} values on the stack, expected 1")]
    UnbalancedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
}
