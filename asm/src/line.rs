use crate::error::Error;

const COMMENT: &str = "//";

/// A source line after comments and surrounding whitespace are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank or comment-only line
    Skip,
    /// `(NAME)`
    Label(&'a str),
    /// Anything that encodes to a machine word
    Inst(&'a str),
}

impl<'a> Line<'a> {
    pub fn parse(raw: &'a str) -> Result<Line<'a>, Error> {
        let (code, _) = split_comment(raw);
        if code.is_empty() {
            return Ok(Line::Skip);
        }

        if let Some(rest) = code.strip_prefix('(') {
            let name = rest
                .strip_suffix(')')
                .ok_or_else(|| Error::MalformedLabel(code.to_string()))?;
            if !is_symbol(name) {
                return Err(Error::MalformedLabel(code.to_string()));
            }
            return Ok(Line::Label(name));
        }

        Ok(Line::Inst(code))
    }
}

/// Split a raw line into trimmed code and the comment text after `//`.
pub fn split_comment(raw: &str) -> (&str, Option<&str>) {
    match raw.find(COMMENT) {
        Some(idx) => (raw[..idx].trim(), Some(&raw[idx + COMMENT.len()..])),
        None => (raw.trim(), None),
    }
}

/// `[A-Za-z_.$:][A-Za-z0-9_.$:]*`
pub fn is_symbol(s: &str) -> bool {
    let is_head = |c: char| c.is_ascii_alphabetic() || "_.$:".contains(c);
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if is_head(head) => chars.all(|c| is_head(c) || c.is_ascii_digit()),
        _ => false,
    }
}
