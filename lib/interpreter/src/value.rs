use std::fmt;
use std::fmt::{Display, Formatter};

use parser::LiteralValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl Value {
    /// `nil` and `false` are falsey, everything else (including `0` and `""`) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    /// Equality as seen by `==` and `!=`. Values of different kinds are never equal.
    /// Numbers compare by bit pattern, so NaN equals NaN and `0` differs from `-0`.
    pub fn eq_in_lox(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(l), Value::Number(r)) => {
                l.to_bits() == r.to_bits() || (l.is_nan() && r.is_nan())
            }
            (lhs, rhs) => lhs.eq(rhs),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if n.is_sign_negative() { "-" } else { "" })
            }
            // `f64`'s Display already drops the fractional part of integral values.
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&LiteralValue<'_>> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match *literal {
            LiteralValue::Number(n) => n.into(),
            LiteralValue::Str(s) => s.into(),
            LiteralValue::Boolean(b) => b.into(),
            LiteralValue::Nil => Value::Nil,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn equality_is_type_strict() {
        assert!(Value::Nil.eq_in_lox(&Value::Nil));
        assert!(!Value::Nil.eq_in_lox(&Value::Bool(false)));
        assert!(!Value::Number(1.0).eq_in_lox(&"1".into()));
        assert!(!Value::from("1").eq_in_lox(&1.0.into()));
        assert!(Value::from("a").eq_in_lox(&"a".into()));
        assert!(Value::Number(2.5).eq_in_lox(&Value::Number(2.5)));
        assert!(!Value::Number(0.0).eq_in_lox(&Value::Number(-0.0)));
        assert!(!Value::Number(-0.0).eq_in_lox(&Value::Number(0.0)));
        assert!(Value::Number(f64::NAN).eq_in_lox(&Value::Number(f64::NAN)));
        assert!(Value::Number(f64::NAN).eq_in_lox(&Value::Number(-f64::NAN)));
    }

    #[test]
    fn stringify() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(-12.0).to_string(), "-12");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(1.0 / 3.0).to_string(), "0.3333333333333333");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }
}
