//! Attribute value types.
//!
//! An attribute holds exactly one of a handful of shapes. Serialization
//! dispatches on the variant rather than inspecting values at runtime.

use crate::ClassSet;
use std::fmt;

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Plain text, escaped on output (e.g. `href`)
    String(String),

    /// Boolean attribute (e.g. `disabled`)
    ///
    /// `true` renders as the bare name. `false` is never stored: setting it
    /// removes the attribute.
    Bool(bool),

    /// Integer, rendered in decimal
    Int(i64),

    /// Floating point number, rendered like ECMAScript's `Number::toString`
    /// (`5`, `0.000001`, `1e-7`, `1e+21`)
    Float(f64),

    /// Several values joined by single spaces (e.g. `rel`)
    List(Vec<String>),

    /// The `class` attribute
    Class(ClassSet),
}

impl AttributeValue {
    /// Whether setting this value removes the attribute instead of storing it.
    pub fn is_removal(&self) -> bool {
        matches!(self, AttributeValue::Bool(false))
    }

    /// Converts the value into the class set stored under `class`.
    pub fn into_class_set(self) -> ClassSet {
        match self {
            AttributeValue::Class(classes) => classes,
            AttributeValue::String(s) => ClassSet::parse(&s),
            AttributeValue::List(tokens) => ClassSet::from_tokens(tokens),
            AttributeValue::Bool(b) => ClassSet::from_scalar(b),
            AttributeValue::Int(n) => ClassSet::from_scalar(n),
            AttributeValue::Float(n) => ClassSet::from_scalar(n),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassSet> {
        match self {
            AttributeValue::Class(classes) => Some(classes),
            _ => None,
        }
    }
}

/// The unescaped text of the value, as it appears between the quotes.
///
/// `Bool(true)` has no quoted form; it displays as `true`.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => f.write_str(s),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Int(n) => write!(f, "{}", n),
            AttributeValue::Float(n) => write_number(f, *n),
            AttributeValue::List(items) => {
                let mut first = true;
                for item in items.iter().filter(|item| !item.is_empty()) {
                    if !first {
                        f.write_str(" ")?;
                    }
                    f.write_str(item)?;
                    first = false;
                }
                Ok(())
            }
            AttributeValue::Class(classes) => write!(f, "{}", classes),
        }
    }
}

/// Writes `n` with the fewest digits that round-trip, switching to
/// exponent notation below 1e-6 and from 1e21 up.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.25e-7".
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{}", n);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return write!(f, "{}", n);
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    if n < 0.0 {
        f.write_str("-")?;
    }
    if len <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{}e{}{}", first, sign, exponent.abs())
        } else {
            write!(f, "{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&String> for AttributeValue {
    fn from(s: &String) -> Self {
        AttributeValue::String(s.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Int(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Int(i64::from(n))
    }
}

impl From<u32> for AttributeValue {
    fn from(n: u32) -> Self {
        AttributeValue::Int(i64::from(n))
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Float(n)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for AttributeValue {
    fn from(items: Vec<S>) -> Self {
        AttributeValue::List(items.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for AttributeValue {
    fn from(items: [S; N]) -> Self {
        AttributeValue::List(items.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl From<ClassSet> for AttributeValue {
    fn from(classes: ClassSet) -> Self {
        AttributeValue::Class(classes)
    }
}

/// `None` behaves like `false`: it removes the attribute.
impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => AttributeValue::Bool(false),
        }
    }
}
