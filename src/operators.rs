use std::{fmt::Display, str::FromStr};

use crate::calculator_error::EvaluationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    pub const ALL: [ArithmeticOp; 4] = [
        ArithmeticOp::Add,
        ArithmeticOp::Subtract,
        ArithmeticOp::Multiply,
        ArithmeticOp::Divide,
    ];

    /// Returns `None` for anything but the four exact selector tokens. Use
    /// `str::parse` instead to get an error carrying the selector.
    pub fn from_selector<T: AsRef<str>>(selector: T) -> Option<Self> {
        match selector.as_ref() {
            "add" => Some(ArithmeticOp::Add),
            "subtract" => Some(ArithmeticOp::Subtract),
            "multiply" => Some(ArithmeticOp::Multiply),
            "divide" => Some(ArithmeticOp::Divide),
            _ => None,
        }
    }

    /// The selector token that names this operation on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Subtract => "subtract",
            ArithmeticOp::Multiply => "multiply",
            ArithmeticOp::Divide => "divide",
        }
    }

    pub fn evaluate(&self, left_side: f64, right_side: f64) -> Result<f64, EvaluationError> {
        let result = match self {
            ArithmeticOp::Add => left_side + right_side,
            ArithmeticOp::Subtract => left_side - right_side,
            ArithmeticOp::Multiply => left_side * right_side,
            ArithmeticOp::Divide => {
                // Exact comparison, so -0.0 is rejected too.
                if right_side == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                } else {
                    left_side / right_side
                }
            }
        };
        Ok(result)
    }

    /// Comma-separated list of every supported selector, for usage text.
    pub fn supported_names() -> String {
        ArithmeticOp::ALL
            .iter()
            .map(|op| op.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ArithmeticOp {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArithmeticOp::from_selector(s)
            .ok_or_else(|| EvaluationError::UnsupportedOperation(s.to_owned()))
    }
}
