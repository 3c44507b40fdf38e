use std::fmt::{Display, Formatter};

use super::types::*;

/// Indirect object reference (`3 0 R`), as extracted from document text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ObjRef {
    pub num: ObjNum,
    pub gen: ObjGen
}

impl Display for ObjRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.num, self.gen)
    }
}
