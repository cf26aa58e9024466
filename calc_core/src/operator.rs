//! Binary operators and the arithmetic behind them
//!
//! The calculator applies exactly one pending operator at a time. Operands
//! travel through the engine as display text, so [`evaluate`] parses both
//! sides before handing them to [`Operator::apply`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// The four binary operations of the keypad.
///
/// # Example
/// ```
/// use calc_core::operator::Operator;
///
/// assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
/// assert_eq!(Operator::Multiply.symbol(), "×");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on buttons and in the expression line
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// ASCII key that selects this operator
    pub fn key_char(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Inverse of [`Operator::key_char`]
    pub fn from_key_char(c: char) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.key_char() == c)
    }

    /// Apply the operator to two numbers.
    ///
    /// Division by zero (either sign) and non-finite results are reported as
    /// errors instead of producing NaN or infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parse a display string as an operand.
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::invalid_operand(text))
}

/// Evaluate `lhs op rhs` where both operands are display strings.
///
/// # Example
/// ```
/// use calc_core::operator::{evaluate, Operator};
///
/// assert_eq!(evaluate("1.5", Operator::Add, "2"), Ok(3.5));
/// assert!(evaluate("5", Operator::Divide, "0").is_err());
/// ```
pub fn evaluate(lhs: &str, op: Operator, rhs: &str) -> CalcResult<f64> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    op.apply(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.5, 4.0), Ok(10.0));
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(5.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(Operator::Multiply.apply(f64::MAX, 10.0), Err(CalcError::Overflow));
        assert_eq!(Operator::Add.apply(f64::MAX, f64::MAX), Err(CalcError::Overflow));
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("0."), Ok(0.0));
        assert_eq!(parse_operand("-12.5"), Ok(-12.5));
        assert_eq!(parse_operand("-"), Err(CalcError::invalid_operand("-")));
        assert!(parse_operand("Error").is_err());
        assert!(parse_operand("inf").is_err());
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("0.5", Operator::Multiply, "4"), Ok(2.0));
        assert_eq!(evaluate("7", Operator::Divide, "0."), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("-", Operator::Add, "1"), Err(CalcError::invalid_operand("-")));
    }

    #[test]
    fn test_key_chars() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_key_char(op.key_char()), Some(op));
        }
        assert_eq!(Operator::from_key_char('x'), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Operator::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");
        assert_eq!(Operator::Divide.to_string(), "÷");
    }
}
