/// Errors arising from locating, parsing or resolving against an xref table.
///
/// Each parse variant carries a static description of what was wrong. None of these is fatal 
/// to the host: a failed parse leaves an empty table behind and a failed resolution is simply 
/// reported as "no definition".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    /// `startxref` missing from the end of the file, or not followed by a usable offset.
    #[error("malformed trailer: {0}")]
    MalformedTrailer(&'static str),

    /// The xref section lacks its keyword, a subsection header, declared rows or the `trailer` 
    /// marker, or a row could not be parsed.
    #[error("malformed xref table: {0}")]
    MalformedXref(&'static str),

    /// The cursor is not on a resolvable reference, or the reference has no table entry.
    #[error("not found: {0}")]
    NotFound(&'static str)
}
