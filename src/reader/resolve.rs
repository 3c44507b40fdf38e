use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::base::*;
use crate::utils;

lazy_static! {
    /// `N G R` immediately at the end of the haystack.
    static ref RE_OBJREF: Regex = Regex::new(r"([0-9]+) ([0-9]+) R$").unwrap();
}

/// Extracts the reference token ending exactly at the end of `prefix`.
///
/// Earlier tokens on the same line are never matched. Numbers which do not fit into 
/// [`ObjNum`](crate::base::types::ObjNum) or [`ObjGen`](crate::base::types::ObjGen) give `None`.
pub fn extract_ref(prefix: &[u8]) -> Option<ObjRef> {
    let caps = RE_OBJREF.captures(prefix)?;
    let num = utils::parse_num(&caps[1])?;
    let gen = utils::parse_num(&caps[2])?;
    Some(ObjRef { num, gen })
}

/// Resolves the indirect reference at `cursor` into the position of the object it points to.
///
/// The reference is the one whose `R` is the first `R` at or after the cursor on its line, and 
/// which ends right there. So a cursor anywhere within `12 0 R` (or before it, with no other `R` 
/// in between) finds it, while a cursor past the `R` does not.
pub fn resolve(doc: &dyn DocumentSource, table: &dyn Locator, cursor: Position) -> Result<Position, Error> {
    let line = doc.line_text(cursor.line)
        .ok_or(Error::NotFound("line out of range"))?;
    let suffix = line.get(cursor.column..)
        .ok_or(Error::NotFound("column out of range"))?;
    let r_pos = suffix.iter()
        .position(|&c| c == b'R')
        .ok_or(Error::NotFound("no reference at cursor"))?;
    let prefix = &line[..=(cursor.column + r_pos)];
    let objref = extract_ref(prefix)
        .ok_or(Error::NotFound("no reference at cursor"))?;
    let entry = table.locate(&objref)
        .ok_or(Error::NotFound("object not in xref table"))?;
    if entry.kind == EntryKind::Free {
        log::debug!("{objref} points to a free xref entry");
    }
    doc.offset_to_position(entry.offset)
        .ok_or(Error::NotFound("object offset outside of document"))
}
