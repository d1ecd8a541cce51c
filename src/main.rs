use std::io::{stderr, stdout};

use calculator::StdioCalculator;

fn main() {
    let mut calculator = StdioCalculator::new(stdout().lock(), stderr().lock());
    let exit_code = calculator.run(std::env::args_os());
    std::process::exit(exit_code);
}
