use crate::record::{Record, Value};

/// Owned copy of one result row, keeping columns in result-set order
///
/// Lookups scan the columns linearly. Rows of the scenery database have at
/// most a few dozen columns, which keeps this faster than hashing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlRecord {
    columns: Vec<(String, Value)>,
}

impl SqlRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`SqlRecord::push`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Append a column, replacing the value if the column already exists
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((column, value)),
        }
    }

    /// Remove a column, returning its value
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let index = self.columns.iter().position(|(name, _)| name == column)?;
        Some(self.columns.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in result-set order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl Record for SqlRecord {
    fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SqlRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.push(column, value);
        }
        record
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::SqlRecord;
    use crate::record::Value;
    use crate::utils::text::decode_text;
    use rusqlite::types::ValueRef;

    impl From<ValueRef<'_>> for Value {
        fn from(value: ValueRef<'_>) -> Self {
            match value {
                ValueRef::Null => Value::Null,
                ValueRef::Integer(value) => Value::Integer(value),
                ValueRef::Real(value) => Value::Real(value),
                ValueRef::Text(bytes) => Value::Text(decode_text(bytes).into_owned()),
                ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
            }
        }
    }

    impl SqlRecord {
        /// Copy all columns of a `rusqlite` row
        ///
        /// Has the signature expected by `Statement::query_map`, so a whole
        /// result set can be collected with
        /// `stmt.query_map([], SqlRecord::from_row)?`.
        pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
            let stmt = row.as_ref();
            let count = stmt.column_count();

            let mut record = SqlRecord {
                columns: Vec::with_capacity(count),
            };
            for index in 0..count {
                let name = stmt.column_name(index)?.to_string();
                let value = Value::from(row.get_ref(index)?);
                record.columns.push((name, value));
            }

            tracing::trace!(columns = count, "Copied SQLite row");
            Ok(record)
        }
    }
}
