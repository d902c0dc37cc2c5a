use crate::interpreter::error::{InterpreterError, Result};
use std::fmt;
use std::fmt::Formatter;

/// The result of evaluating an expression.
///
/// Expressions only contain integers, but division is true division:
/// a quotient that is not a whole number becomes a real.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Integer(value) => *value as f64,
            Value::Real(value) => *value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(value) => *value == 0,
            Value::Real(value) => *value == 0.0,
        }
    }

    pub fn negate(self) -> Result<Value> {
        match self {
            Value::Integer(value) => value
                .checked_neg()
                .map(Value::Integer)
                .ok_or(InterpreterError::Overflow),
            Value::Real(value) => Ok(Value::Real(-value)),
        }
    }

    pub fn add(self, other: Value) -> Result<Value> {
        self.combine(other, i64::checked_add, |a, b| a + b)
    }

    pub fn subtract(self, other: Value) -> Result<Value> {
        self.combine(other, i64::checked_sub, |a, b| a - b)
    }

    pub fn multiply(self, other: Value) -> Result<Value> {
        self.combine(other, i64::checked_mul, |a, b| a * b)
    }

    pub fn divide(self, other: Value) -> Result<Value> {
        if other.is_zero() {
            return Err(InterpreterError::DivisionByZero);
        }
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) if a.wrapping_rem(b) == 0 => a
                .checked_div(b)
                .map(Value::Integer)
                .ok_or(InterpreterError::Overflow),
            (a, b) => Ok(Value::Real(a.as_f64() / b.as_f64())),
        }
    }

    fn combine(
        self,
        other: Value,
        integer_operation: fn(i64, i64) -> Option<i64>,
        real_operation: fn(f64, f64) -> f64,
    ) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => integer_operation(a, b)
                .map(Value::Integer)
                .ok_or(InterpreterError::Overflow),
            (a, b) => Ok(Value::Real(real_operation(a.as_f64(), b.as_f64()))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Real(value) => write!(f, "{}", value),
        }
    }
}
