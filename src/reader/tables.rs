use std::collections::HashMap;
use std::path::Path;

use crate::base::*;
use crate::parser;

use super::resolve;

/// The xref tables of all documents seen so far, keyed by document name.
///
/// A document without an entry is *unparsed*; resolving in it never finds anything. A failed 
/// parse still leaves an (empty) table behind, so the document counts as parsed, but again 
/// nothing resolves until the next successful parse.
#[derive(Debug, Default)]
pub struct DocumentTables {
    tables: HashMap<String, XRef>,
    active: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum TableState<'a> {
    Unparsed,
    Parsed(&'a XRef)
}

impl DocumentTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re-)builds the table of `doc` from its current text, replacing any previous one.
    ///
    /// Returns the number of entries. On error, the error is logged and returned, and the 
    /// document is left with an empty table.
    pub fn parse(&mut self, doc: &dyn DocumentSource) -> Result<usize, Error> {
        let (xref, res) = match parser::read_xref(doc.text()) {
            Ok(xref) => {
                log::info!("{}: {} xref entries @ {}", doc.name(), xref.len(), xref.start);
                let len = xref.len();
                (xref, Ok(len))
            },
            Err(err) => {
                log::error!("{}: {err}", doc.name());
                (XRef::default(), Err(err))
            }
        };
        self.tables.insert(doc.name().to_owned(), xref);
        res
    }

    /// To be called when the active document changes. PDF documents (judged by the extension 
    /// of their name) are parsed anew; others only become the active document.
    pub fn on_active_document_changed(&mut self, doc: Option<&dyn DocumentSource>) {
        self.active = doc.map(|doc| doc.name().to_owned());
        let Some(doc) = doc else { return };
        if !is_pdf(doc.name()) {
            log::debug!("{}: not a PDF, skipping", doc.name());
            return;
        }
        // Failures are logged and leave an empty table; nothing more to do here.
        let _ = self.parse(doc);
    }

    /// To be called when the text of a document changes. Documents which have not been parsed 
    /// before are ignored.
    pub fn on_text_changed(&mut self, doc: &dyn DocumentSource) {
        if self.tables.contains_key(doc.name()) {
            let _ = self.parse(doc);
        }
    }

    /// Forgets the table of a document, returning it to the unparsed state. Returns whether 
    /// there was a table.
    pub fn invalidate(&mut self, name: &str) -> bool {
        self.tables.remove(name).is_some()
    }

    pub fn close(&mut self, name: &str) {
        self.invalidate(name);
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
    }

    pub fn state(&self, name: &str) -> TableState<'_> {
        match self.tables.get(name) {
            Some(xref) => TableState::Parsed(xref),
            None => TableState::Unparsed
        }
    }

    /// Name of the active document, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Resolves the reference at `cursor` within `doc`, using the table stored for it.
    ///
    /// `None` means there is no definition to jump to; the reason is logged at debug level.
    pub fn resolve(&self, doc: &dyn DocumentSource, cursor: Position) -> Option<Location> {
        let locator: &dyn Locator = match self.tables.get(doc.name()) {
            Some(xref) => xref,
            None => &()
        };
        match resolve(doc, locator, cursor) {
            Ok(position) => Some(Location { document: doc.name().to_owned(), position }),
            Err(err) => {
                log::debug!("{}:{}:{}: {err}", doc.name(), cursor.line, cursor.column);
                None
            }
        }
    }
}

fn is_pdf(name: &str) -> bool {
    Path::new(name).extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
