use crate::calc_error::{CalcError, OperandPosition};

/// The token that refers to the most recently saved answer.
pub const LAST_ANSWER_TOKEN: &'static str = "ans";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Literal(f64),
    LastAnswer,
}

impl Operand {
    pub fn parse<T: AsRef<str>>(token: T, position: OperandPosition) -> Result<Self, CalcError> {
        let token = token.as_ref();
        if token == LAST_ANSWER_TOKEN {
            return Ok(Operand::LastAnswer);
        }
        let invalid = || CalcError::InvalidOperand(position, token.to_string());
        if !is_valid_number(token) {
            return Err(invalid());
        }
        // Rust's float parser accepts a leading '+' as well as forms like
        // "5." and ".5", so anything that got past validation parses fine.
        token
            .parse::<f64>()
            .map(Operand::Literal)
            .map_err(|_| invalid())
    }
}

/// Returns whether the given string is a plain decimal number: an optional
/// sign followed by ASCII digits with at most one decimal point.
///
/// At least one digit is required, so a lone "." is rejected. Exponents,
/// hex and named values like "inf" are never valid.
pub fn is_valid_number<T: AsRef<str>>(token: T) -> bool {
    let bytes = token.as_ref().as_bytes();
    let unsigned = match bytes.first() {
        Some(b'+') | Some(b'-') => &bytes[1..],
        _ => bytes,
    };
    let mut dot_seen = false;
    let mut digit_seen = false;

    for &byte in unsigned {
        if byte == b'.' {
            if dot_seen {
                return false;
            }
            dot_seen = true;
        } else if byte.is_ascii_digit() {
            digit_seen = true;
        } else {
            return false;
        }
    }

    digit_seen
}
