//! Token classification for postfix expressions.

use std::fmt;

use crate::error::EvalError;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/`.
    Div,
    /// Exponentiation `^`.
    Pow,
}

impl Operator {
    /// Parses an operator symbol.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Applies the operator to `a` (deeper on the stack) and `b` (top).
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] for `/` with `b == 0`, and
    /// [`EvalError::InvalidPower`] when `^` on finite operands has no finite
    /// result (negative base with fractional exponent, zero to a negative
    /// power, overflow).
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        Ok(match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
            Self::Pow => {
                let r = a.powf(b);
                if a.is_finite() && b.is_finite() && !r.is_finite() {
                    return Err(EvalError::InvalidPower {
                        base: a,
                        exponent: b,
                    });
                }
                r
            }
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A classified token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
}

impl Token {
    /// Classifies a single whitespace-free token.
    ///
    /// Numbers win over operators, so `-` is an operator while `-5` is a number.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidToken`] for anything else.
    pub fn parse(s: &str) -> Result<Self, EvalError> {
        if let Ok(n) = s.parse::<f64>() {
            return Ok(Self::Number(n));
        }
        Operator::from_symbol(s)
            .map(Self::Operator)
            .ok_or_else(|| EvalError::InvalidToken(s.to_string()))
    }
}

/// Returns true if `s` is one of the supported operator symbols.
#[must_use]
pub fn is_operator(s: &str) -> bool {
    Operator::from_symbol(s).is_some()
}

/// Returns true if the whole of `s` parses as a floating-point number.
#[must_use]
pub fn is_number(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}
