use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::{Display, Formatter};

use super::types::*;

/// A cross-reference table parsed from a classical `xref ... trailer` section.
///
/// Entries from all subsections are kept in a single map ordered by object number. An empty 
/// table (`XRef::default()`) stands for a document whose last parse failed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XRef {
    /// Absolute offset of the `xref` keyword, as read from `startxref`.
    pub start: Offset,
    /// The mapping itself.
    ///
    /// For lookups one should generally use the [`Locator`](super::Locator) interface.
    pub map: BTreeMap<ObjNum, XRefEntry>,
}

impl XRef {
    /// Number of entries over all subsections.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the entries in increasing object number.
    pub fn entries(&self) -> impl Iterator<Item = &XRefEntry> + '_ {
        self.map.values()
    }

    /// Adds an entry unless its object number is already present. Returns `false` (leaving the 
    /// table unchanged) in the latter case.
    pub fn insert(&mut self, entry: XRefEntry) -> bool {
        match self.map.entry(entry.num) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            },
            Entry::Occupied(_) => false
        }
    }
}


/// A single row of an xref table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRefEntry {
    /// The object number, reconstructed from the subsection start and row position.
    pub num: ObjNum,
    /// Location of the object definition in the document.
    pub offset: Offset,
    /// The generation number.
    pub gen: ObjGen,
    pub kind: EntryKind,
}

/// The `n` / `f` flag of an xref row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// An object in use (`n` entry).
    Used,
    /// An object number marked as free (`f` entry). For these, `offset` is the next number in 
    /// the free list rather than a location.
    Free
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntryKind::Used => "n",
            EntryKind::Free => "f"
        })
    }
}

impl Display for XRefEntry {
    /// Formats the entry as `num: offset gen flag`, with the row in its fixed-width form.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:010} {:05} {}", self.num, self.offset, self.gen, self.kind)
    }
}
