use std::fmt;
use std::rc::Rc;

use crate::callable::Callable;
use crate::expr::LiteralValue;

/// A runtime Lox value.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// `nil` and `false` are falsy; everything else, `0` and `""` included,
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name of the runtime type, for logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Callable(_) => "callable",
        }
    }
}

/// Equality never coerces: values of different runtime types are unequal.
/// Callables compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::Str(s) => Value::String(s.clone()),
            LiteralValue::True => Value::Bool(true),
            LiteralValue::False => Value::Bool(false),
            LiteralValue::Nil => Value::Nil,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Callable(callable) => write!(f, "{}", callable),

            // 3.0 → "3", 3.5 → "3.5"
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }

            Value::String(s) => write!(f, "{}", s),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::NativeFunction;

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn extreme_magnitudes_stay_positional() {
        assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::Number(0.00001).to_string(), "0.00001");
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
    }

    #[test]
    fn equality_is_type_strict() {
        let samples = [
            Value::Nil,
            Value::Bool(false),
            Value::Bool(true),
            Value::Number(0.0),
            Value::Number(1.0),
            Value::String("1".into()),
            Value::String(String::new()),
        ];

        for (i, a) in samples.iter().enumerate() {
            for (j, b) in samples.iter().enumerate() {
                assert_eq!(a == b, i == j, "{:?} == {:?}", a, b);
            }
        }
    }

    #[test]
    fn callables_compare_by_identity() {
        let clock: Rc<dyn Callable> = Rc::new(NativeFunction::clock());
        let other: Rc<dyn Callable> = Rc::new(NativeFunction::clock());

        assert_eq!(Value::Callable(clock.clone()), Value::Callable(clock.clone()));
        assert_ne!(Value::Callable(clock), Value::Callable(other));
    }
}
