use crate::error::{Error, Result};
use crate::utils::text::decode_text;
use std::collections::HashMap;

/// A single column value as delivered by the storage layer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Storage class name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }

    fn mismatch(&self, column: &str, expected: &'static str) -> Error {
        Error::TypeMismatch {
            column: column.to_string(),
            expected,
            found: self.type_name(),
        }
    }

    /// Convert to `i32`, rounding real values half away from zero
    pub fn to_int(&self, column: &str) -> Result<i32> {
        match self {
            Value::Null => Err(Error::NullValue(column.to_string())),
            Value::Integer(value) => int_in_range(column, *value),
            Value::Real(value) => real_to_int(column, *value),
            Value::Text(text) => {
                let text = text.trim();
                if let Ok(value) = text.parse::<i64>() {
                    int_in_range(column, value)
                } else if let Ok(value) = text.parse::<f64>() {
                    real_to_int(column, value)
                } else {
                    Err(self.mismatch(column, "integer"))
                }
            }
            Value::Blob(_) => Err(self.mismatch(column, "integer")),
        }
    }

    pub fn to_float(&self, column: &str) -> Result<f32> {
        match self {
            Value::Null => Err(Error::NullValue(column.to_string())),
            Value::Integer(value) => Ok(*value as f32),
            Value::Real(value) => Ok(*value as f32),
            Value::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(|value| value as f32)
                .map_err(|_| self.mismatch(column, "real")),
            Value::Blob(_) => Err(self.mismatch(column, "real")),
        }
    }

    /// Convert to `bool`
    ///
    /// Numbers are true when non-zero. Text is true for `"true"` (any case)
    /// or a non-zero number and false for `"false"`, `"0"` or empty text.
    pub fn to_bool(&self, column: &str) -> Result<bool> {
        match self {
            Value::Null => Err(Error::NullValue(column.to_string())),
            Value::Integer(value) => Ok(*value != 0),
            Value::Real(value) => Ok(*value != 0.0),
            Value::Text(text) => {
                let text = text.trim();
                if text.is_empty() || text.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else if text.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else {
                    text.parse::<f64>()
                        .map(|value| value != 0.0)
                        .map_err(|_| self.mismatch(column, "boolean"))
                }
            }
            Value::Blob(_) => Err(self.mismatch(column, "boolean")),
        }
    }

    pub fn to_text(&self, column: &str) -> Result<String> {
        match self {
            Value::Null => Err(Error::NullValue(column.to_string())),
            Value::Integer(value) => Ok(value.to_string()),
            Value::Real(value) => Ok(value.to_string()),
            Value::Text(text) => Ok(text.clone()),
            Value::Blob(bytes) => Ok(decode_text(bytes).into_owned()),
        }
    }
}

fn int_in_range(column: &str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::OutOfRange {
        column: column.to_string(),
        value,
    })
}

fn real_to_int(column: &str, value: f64) -> Result<i32> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Ok(rounded as i32)
    } else {
        Err(Error::OutOfRange {
            column: column.to_string(),
            value: rounded as i64,
        })
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value.into())
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

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Named-column access to one fetched database row
///
/// Implementors only provide [`Record::value`]. Every typed accessor comes in
/// two flavours:
///
/// - `try_value_*` decodes strictly and reports missing columns, NULL values
///   and unconvertible values as [`Error`].
/// - `value_*` is the lenient decode used by the mappers: any error yields the
///   zero-equivalent default (`0`, `0.0`, `false`, empty string).
pub trait Record {
    /// Raw value of a column, `None` if the record has no such column
    fn value(&self, column: &str) -> Option<&Value>;

    fn contains(&self, column: &str) -> bool {
        self.value(column).is_some()
    }

    /// True if the column is absent or NULL
    fn is_null(&self, column: &str) -> bool {
        matches!(self.value(column), None | Some(Value::Null))
    }

    /// Check that all given columns exist in this record
    fn require(&self, columns: &[&str]) -> Result<()> {
        match columns.iter().find(|column| !self.contains(column)) {
            Some(column) => Err(Error::MissingColumn(column.to_string())),
            None => Ok(()),
        }
    }

    fn try_value(&self, column: &str) -> Result<&Value> {
        self.value(column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))
    }

    fn try_value_int(&self, column: &str) -> Result<i32> {
        self.try_value(column)?.to_int(column)
    }

    fn try_value_float(&self, column: &str) -> Result<f32> {
        self.try_value(column)?.to_float(column)
    }

    fn try_value_bool(&self, column: &str) -> Result<bool> {
        self.try_value(column)?.to_bool(column)
    }

    fn try_value_str(&self, column: &str) -> Result<String> {
        self.try_value(column)?.to_text(column)
    }

    fn value_int(&self, column: &str) -> i32 {
        lenient(column, self.try_value_int(column))
    }

    fn value_float(&self, column: &str) -> f32 {
        lenient(column, self.try_value_float(column))
    }

    fn value_bool(&self, column: &str) -> bool {
        lenient(column, self.try_value_bool(column))
    }

    fn value_str(&self, column: &str) -> String {
        lenient(column, self.try_value_str(column))
    }
}

fn lenient<T: Default>(column: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|error| {
        tracing::trace!(column, %error, "Column not decodable, using default");
        T::default()
    })
}

impl<R: Record + ?Sized> Record for &R {
    fn value(&self, column: &str) -> Option<&Value> {
        (**self).value(column)
    }
}

impl Record for HashMap<String, Value> {
    fn value(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}
