use crate::{calculator_error::EvaluationError, operators::ArithmeticOp};

/// Applies the operation named by `selector` to `a` and `b`.
///
/// Fails with [`EvaluationError::UnsupportedOperation`] if the selector
/// isn't one of `add`, `subtract`, `multiply` or `divide`, and with
/// [`EvaluationError::DivisionByZero`] if dividing by exactly zero.
pub fn evaluate<T: AsRef<str>>(selector: T, a: f64, b: f64) -> Result<f64, EvaluationError> {
    let op: ArithmeticOp = selector.as_ref().parse()?;
    op.evaluate(a, b)
}
