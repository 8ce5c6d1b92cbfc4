use std::fmt;

use crate::error::Result;
use crate::magnitude::parse_magnitude;

/// A single cell taken out of a column
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the cell; strings are not parsed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value with magnitude suffixes expanded.
    ///
    /// Numeric cells and plain numeric text pass through, other text must
    /// carry a `k` or `M` suffix, and missing cells become NaN.
    pub fn to_f64_magnitude(&self) -> Result<f64> {
        match self {
            Value::Int(v) => Ok(*v as f64),
            Value::Float(v) => Ok(*v),
            Value::Str(s) => match s.trim().parse::<f64>() {
                Ok(v) => Ok(v),
                Err(_) => parse_magnitude(s),
            },
            Value::Missing => Ok(f64::NAN),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) if v.is_nan() => Ok(()),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}
