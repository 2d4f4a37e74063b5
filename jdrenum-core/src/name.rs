//! Parsing and formatting of Johnny Decimal folder names.
//!
//! A folder name has the shape `PREFIX.DECIMAL REMAINDER`, e.g.
//! `10.01 Projects`. The prefix is an opaque token compared byte for byte,
//! the decimal is a base-10 number and the remainder is carried through
//! untouched, byte for byte, whether or not it is valid UTF-8.

use bstr::ByteSlice;
use std::ffi::{OsStr, OsString};

/// A folder name that matched a given source prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName<'a> {
    pub decimal: u64,
    pub remainder: &'a OsStr,
}

/// Match `base_name` against `source_prefix`.
///
/// Returns `None` for anything that is not `source_prefix.DIGITS REST`.
/// Non-matching names are ordinary content, never an error. Only the part
/// before the first space has to be text.
pub fn parse_name<'a>(base_name: &'a OsStr, source_prefix: &str) -> Option<ParsedName<'a>> {
    let (head, remainder) = <[u8]>::from_os_str(base_name)?.split_once_str(" ")?;
    let head = head.to_str().ok()?;

    let mut parts = head.split('.');
    let (prefix, digits) = match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(digits), None) => (prefix, digits),
        _ => return None,
    };

    if prefix != source_prefix {
        return None;
    }

    let decimal = parse_decimal(digits)?;
    let remainder = remainder.to_os_str().ok()?;
    Some(ParsedName { decimal, remainder })
}

/// Plain digits only: `u64::from_str` would also take a leading `+`.
fn parse_decimal(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Build `PREFIX.DECIMAL REMAINDER` with the decimal zero-padded to `width`.
///
/// Padding never truncates, so a value wider than `width` keeps all digits.
pub fn format_name(prefix: &str, decimal: u64, width: usize, remainder: &OsStr) -> OsString {
    let mut name = OsString::from(format!("{prefix}.{decimal:0width$} "));
    name.push(remainder);
    name
}
