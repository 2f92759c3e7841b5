use crate::{calc_error::CalcError, operand::LAST_ANSWER_TOKEN};

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Clear,
    PrintLastAnswer,
    Compute {
        first: String,
        operator: String,
        second: String,
    },
}

impl Command {
    /// Classifies the positional arguments of an invocation, not including
    /// the program name.
    pub fn from_args<T: AsRef<str>>(args: &[T]) -> Result<Self, CalcError> {
        match args {
            [only] => match only.as_ref() {
                "help" => Ok(Command::Help),
                "clear" => Ok(Command::Clear),
                LAST_ANSWER_TOKEN => Ok(Command::PrintLastAnswer),
                _ => Err(CalcError::IncorrectFormat),
            },
            [first, operator, second] => Ok(Command::Compute {
                first: first.as_ref().to_string(),
                operator: operator.as_ref().to_string(),
                second: second.as_ref().to_string(),
            }),
            _ => Err(CalcError::IncorrectFormat),
        }
    }
}
