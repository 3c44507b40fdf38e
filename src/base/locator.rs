use super::*;

/// Looks up the xref entry for an indirect reference.
pub trait Locator {
    fn locate(&self, objref: &ObjRef) -> Option<XRefEntry>;
}

/// Stands for a document which has not been parsed yet: nothing can be located.
impl Locator for () {
    fn locate(&self, _objref: &ObjRef) -> Option<XRefEntry> {
        None
    }
}

impl Locator for XRef {
    /// Looks up by object number alone. The generation of `objref` is not compared against 
    /// the entry's.
    fn locate(&self, objref: &ObjRef) -> Option<XRefEntry> {
        self.map.get(&objref.num).copied()
    }
}
