use crate::{
    answer_store::{AnswerStore, StoreError},
    calc_error::{CalcError, OperandPosition},
    calculator_output::CalculatorOutput,
    command::Command,
    operand::Operand,
    operators::Operation,
};

const HELP_TEXT: &'static str = "\
Welcome to the Enhanced Simple Calculator!
Supported operations:
  Addition       : +
  Subtraction    : -
  Multiplication : x or *
  Division       : /

Special commands:
  help           : Show this help message
  clear          : Clear the saved answer
  ans            : Print the last saved answer

Usage:
  calc <num1> <operator> <num2>
  - num1, num2 can be numbers or 'ans' to use previous result.

Examples:
  calc 5 + 3       -> 5 + 3 = 8
  calc ans x 2     -> previous answer * 2
  calc 10 / ans    -> 10 / previous answer
  calc ans         -> print last answer";

/// Runs commands against an answer store.
///
/// Nothing is printed directly: anything meant for the user is buffered
/// and can be retrieved with `take_output()`, regardless of whether the
/// command succeeded.
pub struct Calculator<S: AnswerStore> {
    store: S,
    output: Vec<CalculatorOutput>,
}

impl<S: AnswerStore> Calculator<S> {
    pub fn new(store: S) -> Self {
        Calculator {
            store,
            output: vec![],
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn take_output(&mut self) -> Vec<CalculatorOutput> {
        std::mem::take(&mut self.output)
    }

    /// Classifies and executes the given positional arguments.
    pub fn run<T: AsRef<str>>(&mut self, args: &[T]) -> Result<(), CalcError> {
        let command = Command::from_args(args)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<(), CalcError> {
        match command {
            Command::Help => self.show_help(),
            Command::Clear => self.clear_answer(),
            Command::PrintLastAnswer => self.print_last_answer(),
            Command::Compute {
                first,
                operator,
                second,
            } => {
                self.compute(&first, &operator, &second)?;
            }
        }
        Ok(())
    }

    pub fn show_help(&mut self) {
        self.print(HELP_TEXT);
    }

    pub fn clear_answer(&mut self) {
        match self.store.clear() {
            Ok(()) => self.print("Saved answer cleared successfully."),
            Err(_) => self.warn("Unable to clear answer file."),
        }
    }

    pub fn print_last_answer(&mut self) {
        let answer = self.load_answer();
        self.print(format!("Last saved answer: {:.6}", answer));
    }

    /// Evaluates a single binary operation, displays it, and saves the
    /// result as the new answer. Nothing is saved if anything is invalid.
    pub fn compute<T: AsRef<str>>(
        &mut self,
        first: T,
        operator: T,
        second: T,
    ) -> Result<f64, CalcError> {
        let left_side = Operand::parse(first, OperandPosition::First)?;
        let left_side = self.resolve(left_side);
        let right_side = Operand::parse(second, OperandPosition::Second)?;
        let right_side = self.resolve(right_side);

        let operator = operator.as_ref();
        let Some(operation) = Operation::from_token(operator) else {
            return Err(CalcError::InvalidOperation(operator.to_string()));
        };
        let result = operation.evaluate(left_side, right_side)?;

        self.print(format!(
            "{:.3} {} {:.3} = {:.6}",
            left_side,
            operation.symbol(),
            right_side,
            result
        ));
        if self.store.save(result).is_err() {
            self.warn("Unable to write to file.");
        }

        Ok(result)
    }

    pub fn resolve(&mut self, operand: Operand) -> f64 {
        match operand {
            Operand::Literal(number) => number,
            Operand::LastAnswer => self.load_answer(),
        }
    }

    fn load_answer(&mut self) -> f64 {
        match self.store.load() {
            Ok(answer) => answer,
            Err(StoreError::Missing) => {
                self.output.push(CalculatorOutput::no_previous_answer());
                0.0
            }
            Err(_) => 0.0,
        }
    }

    fn print<T: Into<String>>(&mut self, string: T) {
        self.output.push(CalculatorOutput::Print(string.into()));
    }

    fn warn<T: Into<String>>(&mut self, message: T) {
        self.output.push(CalculatorOutput::Warning(message.into()));
    }
}
