mod calculator_error;
mod cli_args;
mod evaluator;
mod operators;
mod stdio_calculator;

pub use calculator_error::{CalculatorError, EvaluationError};
pub use cli_args::CliArgs;
pub use evaluator::evaluate;
pub use operators::ArithmeticOp;
pub use stdio_calculator::StdioCalculator;
