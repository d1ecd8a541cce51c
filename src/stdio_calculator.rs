use std::{ffi::OsString, io::Write};

use colored::*;

use crate::{calculator_error::CalculatorError, cli_args::CliArgs, evaluator::evaluate};

/// Connects process arguments to the evaluator. Results go to `stdout`,
/// everything else to `stderr`.
pub struct StdioCalculator<O: Write, E: Write> {
    stdout: O,
    stderr: E,
}

impl<O: Write, E: Write> StdioCalculator<O, E> {
    pub fn new(stdout: O, stderr: E) -> Self {
        StdioCalculator { stdout, stderr }
    }

    fn show_error(&mut self, err: CalculatorError) -> i32 {
        // If stderr is gone too there's nobody left to tell.
        let _ = writeln!(self.stderr, "{}: {}", "ERROR".red(), err);
        1
    }

    /// Runs a single calculation and returns the process exit code.
    /// The first item of `args` is the program name, as with
    /// `std::env::args_os()`.
    pub fn run<I, T>(&mut self, args: I) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match self.run_impl(args.into_iter().map(Into::into).collect()) {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self, args: Vec<OsString>) -> Result<(), i32> {
        let cli_args =
            CliArgs::from_process_args(&args).map_err(|err| self.show_error(err))?;

        let (num1, num2) = cli_args
            .parse_operands()
            .map_err(|err| self.show_error(err))?;

        let result = evaluate(&cli_args.operation, num1, num2)
            .map_err(|err| self.show_error(err.into()))?;

        writeln!(
            self.stdout,
            "Result of {}: {}",
            cli_args.operation,
            format_result(result)
        )
        .and_then(|_| self.stdout.flush())
        .map_err(|_| 1)?;

        Ok(())
    }
}

/// Two decimal places for finite results. Overflowed and undefined results
/// print as `+Inf`, `-Inf` and `NaN`.
fn format_result(result: f64) -> String {
    if result.is_nan() {
        "NaN".to_string()
    } else if result.is_infinite() {
        let sign = if result > 0.0 { '+' } else { '-' };
        format!("{}Inf", sign)
    } else {
        format!("{:.2}", result)
    }
}
