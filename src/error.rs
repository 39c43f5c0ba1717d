/// Errors surfaced by strict record decoding and object reference parsing
///
/// The `fill_*` mappers never return these. They use the lenient accessors
/// of [`Record`](crate::Record), which fall back to zero-equivalent values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Column not found in record: {0}")]
    MissingColumn(String),

    #[error("Column is NULL: {0}")]
    NullValue(String),

    #[error("Column {column} holds {found}, expected {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value of column {column} out of range: {value}")]
    OutOfRange { column: String, value: i64 },

    #[error("Invalid map object reference list: {0}")]
    InvalidObjectRef(String),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
