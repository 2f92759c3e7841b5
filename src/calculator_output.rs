use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub enum CalculatorOutput {
    /// Regular output, e.g. a computed result.
    Print(String),
    /// Informational message that doesn't indicate anything went wrong.
    Notice(String),
    /// A problem that doesn't change whether the invocation succeeded.
    Warning(String),
}

impl CalculatorOutput {
    pub fn no_previous_answer() -> Self {
        CalculatorOutput::Notice("No previous answer found. Defaulting to 0.".to_string())
    }
}

impl Display for CalculatorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorOutput::Print(string) => string.fmt(f),
            CalculatorOutput::Notice(message) => message.fmt(f),
            CalculatorOutput::Warning(message) => write!(f, "Error: {}", message),
        }
    }
}
