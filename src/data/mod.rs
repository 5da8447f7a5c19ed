//! Data module - CSV tokenizing, table building and loading

mod columns;
mod loader;
mod table;
mod tokenizer;

pub use loader::{DataLoader, LoadedTable, LoaderError};
pub use table::{HeaderField, Record, Table};
