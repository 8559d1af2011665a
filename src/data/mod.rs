//! Happiness data
//!
//! Loading the CSV resource into an immutable in-memory [`Table`].

mod error;
mod loader;
mod table;

pub use error::{LoadError, LoadResult};
pub use loader::{load_table, DataSource};
pub use table::{CellValue, ColumnConfig, Row, ScoreRange, Table};
