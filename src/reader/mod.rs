mod resolve;
mod tables;

pub use resolve::{resolve, extract_ref};
pub use tables::{DocumentTables, TableState};
