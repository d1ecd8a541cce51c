use std::ffi::OsString;

use clap::Parser;

use crate::calculator_error::CalculatorError;

/// Number of process arguments, counting the program name.
const EXPECTED_ARG_COUNT: usize = 4;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Operation to perform (add, subtract, multiply or divide).
    #[arg(allow_hyphen_values = true)]
    pub operation: String,

    /// First operand.
    #[arg(allow_hyphen_values = true)]
    pub num1: String,

    /// Second operand.
    #[arg(allow_hyphen_values = true)]
    pub num2: String,
}

impl CliArgs {
    /// Parses the raw process arguments, program name first. Anything other
    /// than exactly three arguments after the program name is a usage error,
    /// and all three are taken as plain values, even `--` or `-h`.
    pub fn from_process_args(args: &[OsString]) -> Result<Self, CalculatorError> {
        let program = args
            .first()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        if args.len() != EXPECTED_ARG_COUNT {
            return Err(CalculatorError::Usage { program });
        }

        // After an escape clap stops looking for flags, so a user-supplied
        // `--` is kept as a positional value.
        let escaped = std::iter::once(OsString::from(&program))
            .chain(std::iter::once(OsString::from("--")))
            .chain(args[1..].iter().cloned());
        CliArgs::try_parse_from(escaped).map_err(|_| CalculatorError::Usage { program })
    }

    /// Parses both operands as floating-point numbers. Failure is reported
    /// generically, without saying which operand was at fault.
    pub fn parse_operands(&self) -> Result<(f64, f64), CalculatorError> {
        match (parse_operand(&self.num1), parse_operand(&self.num2)) {
            (Some(num1), Some(num2)) => Ok((num1, num2)),
            _ => Err(CalculatorError::InvalidNumber),
        }
    }
}

/// Out-of-range literals such as `1e400` are rejected rather than rounded to
/// infinity. Infinity itself is only accepted when spelled out.
fn parse_operand(value: &str) -> Option<f64> {
    let number = value.parse::<f64>().ok()?;
    if number.is_infinite() && !spells_infinity(value) {
        return None;
    }
    Some(number)
}

fn spells_infinity(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(['+', '-'])
        .unwrap_or(value)
        .to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use crate::{calculator_error::CalculatorError, cli_args::CliArgs};

    fn from_args(args: &[&str]) -> Result<CliArgs, CalculatorError> {
        let args = std::iter::once("calculator")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect::<Vec<_>>();
        CliArgs::from_process_args(&args)
    }

    fn parse(args: &[&str]) -> CliArgs {
        from_args(args).unwrap()
    }

    fn usage_error() -> CalculatorError {
        CalculatorError::Usage {
            program: "calculator".to_string(),
        }
    }

    #[test]
    fn it_accepts_negative_operands() {
        let args = parse(&["subtract", "-5", "-2.5"]);
        assert_eq!(args.operation, "subtract");
        assert_eq!(args.parse_operands(), Ok((-5.0, -2.5)));
    }

    #[test]
    fn it_parses_scientific_and_fractional_operands() {
        assert_eq!(parse(&["add", "1e3", ".5"]).parse_operands(), Ok((1000.0, 0.5)));
        assert_eq!(parse(&["add", "+2", "-1E-2"]).parse_operands(), Ok((2.0, -0.01)));
    }

    #[test]
    fn it_rejects_unparsable_operands() {
        for args in [["add", "five", "3"], ["add", "3", "five"], ["add", "", "1"]] {
            assert_eq!(
                parse(&args).parse_operands(),
                Err(CalculatorError::InvalidNumber),
                "args {:?}",
                args
            );
        }
    }

    #[test]
    fn it_rejects_out_of_range_operands() {
        for args in [["add", "1e400", "1"], ["add", "1", "-1e400"]] {
            assert_eq!(
                parse(&args).parse_operands(),
                Err(CalculatorError::InvalidNumber),
                "args {:?}",
                args
            );
        }
    }

    #[test]
    fn it_accepts_spelled_out_infinity() {
        let (num1, num2) = parse(&["add", "inf", "-Infinity"]).parse_operands().unwrap();
        assert_eq!(num1, f64::INFINITY);
        assert_eq!(num2, f64::NEG_INFINITY);
    }

    #[test]
    fn it_requires_exactly_three_arguments() {
        let cases: [&[&str]; 5] = [
            &[],
            &["add", "2"],
            &["add", "2", "3", "4"],
            &["add", "2", "--", "3"],
            &["--help"],
        ];
        for args in cases {
            assert_eq!(from_args(args).unwrap_err(), usage_error(), "args {:?}", args);
        }
    }

    #[test]
    fn flag_like_arguments_are_plain_values() {
        let args = parse(&["-5", "-h", "--"]);
        assert_eq!(args.operation, "-5");
        assert_eq!(args.num1, "-h");
        assert_eq!(args.num2, "--");

        let args = parse(&["--version", "--help", "-V"]);
        assert_eq!(args.operation, "--version");
        assert_eq!(args.num1, "--help");
        assert_eq!(args.num2, "-V");
    }
}
