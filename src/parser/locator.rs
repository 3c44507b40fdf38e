use crate::base::*;
use crate::base::types::*;
use crate::utils;

/// Number of trailing bytes searched for `startxref`.
pub const TAIL_LEN: usize = 50;

/// Finds the xref section through the `startxref` pointer near the end of `data`.
///
/// Only the last [`TAIL_LEN`] bytes are inspected, and the first `startxref` occurring there is 
/// used. White space between the keyword and the number is skipped; the number ends at the 
/// first non-digit. Returns the offset together with `data` sliced from that offset to the end.
pub fn locate(data: &[u8]) -> Result<(Offset, &[u8]), Error> {
    const SXREF: &[u8] = b"startxref";
    let tail = &data[data.len().saturating_sub(TAIL_LEN)..];
    let pos = tail.windows(SXREF.len())
        .position(|w| w == SXREF)
        .ok_or(Error::MalformedTrailer("startxref not found"))?;
    let rest = &tail[(pos + SXREF.len())..];
    let rest = &rest[rest.iter().take_while(|&&c| utils::is_white(c)).count()..];
    let digits = &rest[..rest.iter().take_while(|c| c.is_ascii_digit()).count()];
    let offset = utils::parse_num::<Offset>(digits)
        .ok_or(Error::MalformedTrailer("malformed startxref"))?;
    let start = usize::try_from(offset).ok()
        .filter(|&start| start <= data.len())
        .ok_or(Error::MalformedTrailer("startxref points past end of file"))?;
    Ok((offset, &data[start..]))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate() {
        let data = std::fs::read("src/tests/basic.pdf").unwrap();
        let (offset, section) = locate(&data).unwrap();
        assert_eq!(offset, 407);
        assert!(section.starts_with(b"xref\n0 6\n"));
        assert!(section.ends_with(b"%%EOF\n"));
        // idempotent
        assert_eq!(locate(&data).unwrap().0, offset);
    }

    #[test]
    fn test_short_file() {
        let data = b"xref\nstartxref\n0\n%%EOF";
        let (offset, section) = locate(data).unwrap();
        assert_eq!(offset, 0);
        assert_eq!(section, &data[..]);
    }

    #[test]
    fn test_no_startxref() {
        let data = b"trailer\n<< /Size 3 >>\n%%EOF\n";
        assert!(matches!(locate(data), Err(Error::MalformedTrailer(_))));

        // present in the file, but not within the tail
        let mut data = b"startxref\n0\n".to_vec();
        data.extend_from_slice(&[b' '; TAIL_LEN]);
        assert!(matches!(locate(&data), Err(Error::MalformedTrailer(_))));
    }

    #[test]
    fn test_malformed_offset() {
        let data = b"startxref\n%%EOF\n";
        assert!(matches!(locate(data), Err(Error::MalformedTrailer(_))));
        let data = b"startxref\n-12\n%%EOF\n";
        assert!(matches!(locate(data), Err(Error::MalformedTrailer(_))));
        let data = b"startxref\n999\n%%EOF\n";
        assert!(matches!(locate(data), Err(Error::MalformedTrailer(_))));
    }

    #[test]
    fn test_first_match_wins() {
        let data = b"<< /Note (startxref1) >>\nstartxref\n0\n%%EOF";
        assert_eq!(locate(data).unwrap().0, 1);
    }
}
