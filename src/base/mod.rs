pub mod types {
    /// Object number: type alias for `u64`.
    pub type ObjNum = u64;
    /// Object generation: type alias for `u16`.
    ///
    /// Classical xref tables store the generation in five decimal digits, so the largest value 
    /// which can appear is 65535 (`u16::MAX`), used for the head of the free list.
    pub type ObjGen = u16;
    /// Byte offset within a document: type alias for `u64`.
    pub type Offset = u64;
}

mod objref;
pub use objref::*;

mod xref;
pub use xref::*;

mod locator;
pub use locator::*;

mod position;
pub use position::*;

mod document;
pub use document::*;

mod error;
pub use error::*;
