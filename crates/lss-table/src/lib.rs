//! lss-table: numeric CSV tables <-> [`lss_core::Matrix`].
//!
//! Tables have no header, one record per matrix row, and every field is a
//! decimal real number.

pub mod error;
pub mod format;
pub mod read;
pub mod write;

pub use error::{TableError, TableResult};
pub use format::TableFormat;
pub use read::{load_table, load_table_with, read_table};
pub use write::{save_table, save_table_with, write_table};
