//! Locating and parsing the cross-reference table of a PDF file, and resolving indirect 
//! references (`12 0 R`) in its text to the position of the object they point to.
//!
//! ```no_run
//! use pdfxref::{Position, TextDocument};
//! use pdfxref::reader::DocumentTables;
//!
//! let doc = TextDocument::new("file.pdf", std::fs::read("file.pdf").unwrap());
//! let mut tables = DocumentTables::new();
//! tables.on_active_document_changed(Some(&doc));
//! if let Some(loc) = tables.resolve(&doc, Position { line: 3, column: 10 }) {
//!     println!("{loc}");
//! }
//! ```

pub mod base;
pub mod parser;
pub mod reader;
mod utils;

pub use base::*;
