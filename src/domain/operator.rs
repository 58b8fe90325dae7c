//! Arithmetic operators and how they fold their operands.

use std::fmt;

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// The closed set of operators an operation node may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Combine already evaluated operands, in order.
    ///
    /// - `+` sums all operands (0 for none)
    /// - `*` multiplies all operands (1 for none)
    /// - `-` subtracts the sum of the rest from the first operand
    /// - `/` divides the first operand by the product of the rest
    ///
    /// `-` and `/` fail with [`DomainError::InsufficientOperands`] when there
    /// is no first operand. Division by zero is left to IEEE-754.
    #[instrument(level = "trace")]
    pub fn apply(self, operands: &[f64]) -> DomainResult<f64> {
        match self {
            Operator::Add => Ok(sum(operands)),
            Operator::Mul => Ok(product(operands)),
            Operator::Sub => {
                let (first, rest) = self.split_first(operands)?;
                Ok(first - sum(rest))
            }
            Operator::Div => {
                let (first, rest) = self.split_first(operands)?;
                Ok(first / product(rest))
            }
        }
    }

    fn split_first(self, operands: &[f64]) -> DomainResult<(f64, &[f64])> {
        operands
            .split_first()
            .map(|(first, rest)| (*first, rest))
            .ok_or(DomainError::InsufficientOperands {
                operator: self.symbol(),
            })
    }
}

// Explicit folds: `Iterator::sum` on floats starts at -0.0 for an empty input.
fn sum(operands: &[f64]) -> f64 {
    operands.iter().fold(0.0, |acc, x| acc + x)
}

fn product(operands: &[f64]) -> f64 {
    operands.iter().fold(1.0, |acc, x| acc * x)
}

impl TryFrom<char> for Operator {
    type Error = DomainError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(DomainError::InvalidOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
