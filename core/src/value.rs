//! Values accepted for query parameters, headers and form fields.
//!
//! # Design
//! Every value ends up as a string on the wire. Instead of accepting "any"
//! value, callers pass something convertible into `Value`: strings as-is,
//! primitives through their `Display` form, `None` as the empty string.
//! Types outside that set go through `Value::display`.

use std::fmt;

/// A single parameter value, already coerced to its wire text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// Renders as the empty string.
    #[default]
    Null,
    Text(String),
}

impl Value {
    /// Render any `Display` type, for caller types with their own string form.
    pub fn display(value: &impl fmt::Display) -> Self {
        Value::Text(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::Null => "",
            Value::Text(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Text(value.to_string())
                }
            }
        )*
    };
}

value_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
