use crate::calc_error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MultiplySymbol {
    Letter,
    Asterisk,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply(MultiplySymbol),
    Divide,
}

impl Operation {
    // I considered FromStr here but it required an associated Error type
    // and I just wanted to use Option.
    pub fn from_token<T: AsRef<str>>(token: T) -> Option<Self> {
        match token.as_ref() {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "x" => Some(Operation::Multiply(MultiplySymbol::Letter)),
            "*" => Some(Operation::Multiply(MultiplySymbol::Asterisk)),
            "/" => Some(Operation::Divide),
            _ => None,
        }
    }

    /// The character the user typed to select this operation.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply(MultiplySymbol::Letter) => 'x',
            Operation::Multiply(MultiplySymbol::Asterisk) => '*',
            Operation::Divide => '/',
        }
    }

    pub fn evaluate(&self, left_side: f64, right_side: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operation::Add => left_side + right_side,
            Operation::Subtract => left_side - right_side,
            Operation::Multiply(_) => left_side * right_side,
            Operation::Divide => {
                // Note that this is also true for negative zero.
                if right_side == 0.0 {
                    return Err(CalcError::DivisionByZero);
                } else {
                    left_side / right_side
                }
            }
        };
        Ok(result)
    }
}
