/// Parses an unsigned decimal number. Unlike `str::parse`, a sign is rejected, as is an empty 
/// string.
pub fn parse_num<T: std::str::FromStr>(bstr: &[u8]) -> Option<T> {
    if bstr.is_empty() || !bstr.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(bstr).ok()?
        .parse::<T>().ok()
}

/// PDF white-space characters.
pub fn is_white(c: u8) -> bool {
    matches!(c, b'\x00' | b'\x09' | b'\x0A' | b'\x0C' | b'\x0D' | b'\x20')
}

pub fn trim_white(bstr: &[u8]) -> &[u8] {
    let start = bstr.iter().position(|&c| !is_white(c)).unwrap_or(bstr.len());
    let end = bstr.iter().rposition(|&c| !is_white(c)).map_or(start, |ix| ix + 1);
    &bstr[start..end]
}

/// Splits on runs of white space, skipping empty tokens.
pub fn tokens(bstr: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    bstr.split(|&c| is_white(c))
        .filter(|tk| !tk.is_empty())
}

/// Splits into lines ended by any of `\r\n`, `\r`, `\n`. The terminators are not included.
pub fn lines(data: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let mut rest = Some(data);
    std::iter::from_fn(move || {
        let cur = rest?;
        match cur.iter().position(|&c| c == b'\r' || c == b'\n') {
            Some(ix) => {
                let skip = if cur[ix] == b'\r' && cur.get(ix + 1) == Some(&b'\n') { 2 } else { 1 };
                rest = Some(&cur[(ix + skip)..]);
                Some(&cur[..ix])
            },
            None => {
                rest = None;
                Some(cur)
            }
        }
    })
}
