mod answer_store;
mod calc_error;
mod calculator;
mod calculator_output;
mod command;
mod operand;
mod operators;

pub use answer_store::{
    AnswerStore, FileAnswerStore, MemoryAnswerStore, StoreError, DEFAULT_ANSWER_FILENAME,
};
pub use calc_error::{CalcError, OperandPosition};
pub use calculator::Calculator;
pub use calculator_output::CalculatorOutput;
pub use command::Command;
pub use operand::{is_valid_number, Operand};
pub use operators::{MultiplySymbol, Operation};
