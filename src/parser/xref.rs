use crate::base::*;
use crate::base::types::*;
use crate::utils;

/// Parses a classical xref section, starting at the `xref` keyword and ending at `trailer`.
///
/// Each subsection consists of a `<start> <count>` header followed by exactly `count` rows of 
/// the form `<offset> <gen> <n|f>`; the object number of a row is `start` plus its position. 
/// Subsections repeat until the `trailer` line, with all of them collected into one table. 
/// If an object number appears twice, the first occurrence is kept. Whatever follows `trailer` 
/// is not looked at.
pub fn parse_xref(section: &[u8]) -> Result<XRef, Error> {
    let mut lines = utils::lines(section)
        .map(utils::trim_white)
        .filter(|line| !line.is_empty());
    if lines.next() != Some(&b"xref"[..]) {
        return Err(Error::MalformedXref("xref keyword not found"));
    }

    let mut xref = XRef::default();
    let mut subsections = 0;
    loop {
        let line = lines.next()
            .ok_or(Error::MalformedXref("trailer not found"))?;
        if is_trailer(line) {
            break;
        }
        let (start, count) = parse_header(line)?;
        let end = start.checked_add(count)
            .ok_or(Error::MalformedXref("subsection out of range"))?;
        for num in start..end {
            let row = lines.next()
                .filter(|line| !is_trailer(line))
                .ok_or(Error::MalformedXref("fewer rows than declared"))?;
            let entry = parse_row(num, row)?;
            if !xref.insert(entry) {
                log::warn!("Duplicate object number {num} in xref table");
            }
        }
        subsections += 1;
    }
    if subsections == 0 {
        return Err(Error::MalformedXref("no subsection header"));
    }
    log::debug!("Parsed {} xref entries in {subsections} subsection(s)", xref.len());
    Ok(xref)
}

fn is_trailer(line: &[u8]) -> bool {
    line.starts_with(b"trailer")
}

fn parse_header(line: &[u8]) -> Result<(ObjNum, ObjNum), Error> {
    let err = || Error::MalformedXref("malformed subsection header");
    let mut tks = utils::tokens(line);
    let start = tks.next().and_then(utils::parse_num).ok_or_else(err)?;
    let count = tks.next().and_then(utils::parse_num).ok_or_else(err)?;
    if tks.next().is_some() {
        return Err(err());
    }
    Ok((start, count))
}

/// Only the offset is mandatory. A missing generation reads as 0, a missing flag as `n`.
fn parse_row(num: ObjNum, row: &[u8]) -> Result<XRefEntry, Error> {
    let err = || Error::MalformedXref("malformed xref row");
    let mut tks = utils::tokens(row);
    let offset = tks.next().and_then(utils::parse_num::<Offset>).ok_or_else(err)?;
    let gen = match tks.next() {
        Some(tk) => utils::parse_num::<ObjGen>(tk).ok_or_else(err)?,
        None => 0
    };
    let kind = match tks.next() {
        Some([b'n']) | None => EntryKind::Used,
        Some([b'f']) => EntryKind::Free,
        _ => return Err(err())
    };
    if tks.next().is_some() {
        return Err(err());
    }
    Ok(XRefEntry { num, offset, gen, kind })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(xref: &XRef) -> Vec<(ObjNum, Offset)> {
        xref.entries().map(|e| (e.num, e.offset)).collect()
    }

    #[test]
    fn test_parse_basic() {
        let section = b"xref
0 3
0000000000 65535 f
0000000010 00000 n
0000000025 00000 n
trailer
<< /Size 3 >>
";
        let xref = parse_xref(section).unwrap();
        assert_eq!(xref.len(), 3);
        assert_eq!(offsets(&xref), vec![(0, 0), (1, 10), (2, 25)]);
        assert_eq!(xref.map[&0], XRefEntry { num: 0, offset: 0, gen: 65535, kind: EntryKind::Free });
        assert_eq!(xref.map[&2].kind, EntryKind::Used);
    }

    #[test]
    fn test_line_endings() {
        // two-byte EOLs as they appear in real files: " \n" and "\r\n"
        let section = b"xref\r\n5 2\r\n0000000100 00000 n \n0000000200 00001 n\r\ntrailer<< >>";
        let xref = parse_xref(section).unwrap();
        assert_eq!(offsets(&xref), vec![(5, 100), (6, 200)]);
        assert_eq!(xref.map[&6].gen, 1);

        let section = b"xref\r0 1\r0000000000 65535 f\r\rtrailer\r";
        assert_eq!(parse_xref(section).unwrap().len(), 1);
    }

    #[test]
    fn test_subsections() {
        let section = b"xref
0 2
0000000000 65535 f
0000000009 00000 n
4 1
0000000300 00000 n
1 1
0000000999 00000 n
trailer
";
        let xref = parse_xref(section).unwrap();
        // object 1 declared again in the last subsection: the first one is kept
        assert_eq!(offsets(&xref), vec![(0, 0), (1, 9), (4, 300)]);
    }

    #[test]
    fn test_malformed() {
        let cases: &[&[u8]] = &[
            b"",
            b"0 1\n0000000000 65535 f\ntrailer\n",
            b"xref\n",
            b"xref\ntrailer\n",
            b"xref\n0\n0000000000 65535 f\ntrailer\n",
            b"xref\n0 1 2\n0000000000 65535 f\ntrailer\n",
            b"xref\n0 2\n0000000000 65535 f\ntrailer\n",
            b"xref\n0 1\n0000000000 65535 f\n",
            b"xref\n0 1\nabcdefghij 65535 f\ntrailer\n",
            b"xref\n0 1\n-000000001 65535 f\ntrailer\n",
            b"xref\n0 1\n0000000000 99999 f\ntrailer\n",
            b"xref\n0 1\n0000000000 65535 x\ntrailer\n",
            b"xref\n0 1\n0000000000 65535 f 1\ntrailer\n",
            b"xref\n0 2\n0000000000 65535 f\n0000000010 00000 n\n0000000025 00000 n\ntrailer\n",
        ];
        for case in cases {
            assert!(matches!(parse_xref(case), Err(Error::MalformedXref(_))),
                "{:?}", String::from_utf8_lossy(case));
        }
    }
}
