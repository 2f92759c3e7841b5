mod cli_args;
mod stdio_calculator;

use cli_args::CliArgs;
use stdio_calculator::StdioCalculator;

fn main() {
    // Any argument list clap doesn't like, or doesn't pass through intact,
    // is just an incorrectly formatted invocation as far as we're concerned.
    let args = CliArgs::from_env();
    let mut calculator = StdioCalculator::new(args);
    let exit_code = calculator.run();
    std::process::exit(exit_code);
}
