use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The four supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The character used to display this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero is short-circuited to an error before any
    /// arithmetic happens; no result value exists for that iteration.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide => {
                if b == 0.0 {
                    Err(Error::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = Error;

    // Map the raw operator character onto the closed operator set
    fn try_from(c: char) -> Result<Self> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(Error::InvalidOperator(other)),
        }
    }
}
