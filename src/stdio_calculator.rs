use calc::{CalcError, Calculator, CalculatorOutput, FileAnswerStore};
use colored::*;

use crate::cli_args::CliArgs;

pub struct StdioCalculator {
    args: Option<CliArgs>,
    calculator: Calculator<FileAnswerStore>,
}

impl StdioCalculator {
    pub fn new(args: Option<CliArgs>) -> Self {
        StdioCalculator {
            args,
            calculator: Calculator::new(FileAnswerStore::default()),
        }
    }

    fn show_calculator_output(&mut self) {
        for output in self.calculator.take_output() {
            match output {
                CalculatorOutput::Print(_) => println!("{}", output),
                CalculatorOutput::Notice(_) => println!("{}", output.to_string().yellow()),
                CalculatorOutput::Warning(_) => println!("{}", output.to_string().red()),
            }
        }
    }

    fn show_error(&mut self, err: CalcError) {
        println!("{}", err.to_string().red());
    }

    pub fn run(&mut self) -> i32 {
        let result = match &self.args {
            Some(args) => self.calculator.run(&args.positionals()),
            None => Err(CalcError::IncorrectFormat),
        };

        // Regardless of whether an error occurred, show any buffered output.
        self.show_calculator_output();

        match result {
            Ok(()) => 0,
            Err(err) => {
                self.show_error(err);
                1
            }
        }
    }
}
