mod locator;
mod xref;

pub use locator::{locate, TAIL_LEN};
pub use xref::parse_xref;

use crate::base::*;

/// Locates the xref section through `startxref` and parses it.
///
/// The returned table records the offset it was found at in [`XRef::start`].
pub fn read_xref(data: &[u8]) -> Result<XRef, Error> {
    let (start, section) = locate(data)?;
    let mut xref = parse_xref(section)?;
    xref.start = start;
    Ok(xref)
}
