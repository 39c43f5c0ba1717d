#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::record::{Record, Value};
pub use crate::sql::SqlRecord;
pub use crate::types::*;

mod error;
pub mod fill;
mod record;
mod sql;
mod types;
pub mod utils;
