use std::{error::Error, fmt::Display};

use crate::operators::ArithmeticOp;

/// Everything that can stop a single invocation of the calculator.
/// None of these are recoverable: the driver reports them and exits.
#[derive(Debug, PartialEq)]
pub enum CalculatorError {
    Usage { program: String },
    InvalidNumber,
    Evaluation(EvaluationError),
}

#[derive(Debug, PartialEq)]
pub enum EvaluationError {
    UnsupportedOperation(String),
    DivisionByZero,
}

impl Error for EvaluationError {}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationError::UnsupportedOperation(selector) => {
                write!(f, "Unsupported operation: {}", selector)
            }
            EvaluationError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl From<EvaluationError> for CalculatorError {
    fn from(value: EvaluationError) -> Self {
        CalculatorError::Evaluation(value)
    }
}

impl Error for CalculatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CalculatorError::Evaluation(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorError::Usage { program } => {
                write!(
                    f,
                    "Usage: {} <operation> <num1> <num2>\nSupported operations: {}",
                    program,
                    ArithmeticOp::supported_names()
                )
            }
            CalculatorError::InvalidNumber => write!(f, "Invalid number arguments"),
            CalculatorError::Evaluation(err) => write!(f, "{}", err),
        }
    }
}
