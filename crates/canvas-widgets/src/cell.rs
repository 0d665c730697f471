//! Typed cell values extracted from rows by column accessors.

use std::fmt;

/// A scalar value a column accessor extracts from a row.
///
/// The data table never inspects row types directly; every cell it
/// renders or sorts passes through this enum. A missing field is
/// represented as `None` at the accessor level, not as a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Free-form text.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
}

impl CellValue {
    /// Numeric view of the value, when it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(CellValue::from("abc").to_string(), "abc");
        assert_eq!(CellValue::from(42i64).to_string(), "42");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(true).to_string(), "true");
    }

    #[test]
    fn numeric_view() {
        assert_eq!(CellValue::from(3i64).as_number(), Some(3.0));
        assert_eq!(CellValue::from(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::from("3").as_number(), None);
        assert_eq!(CellValue::from(false).as_number(), None);
    }
}
