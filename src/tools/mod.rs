use crate::decoder::terminator::GROUP_SEPARATOR;
use crate::models::ParseResult;
use std::fs;
use std::path::Path;

/// Shortest EAN-13 payload accepted by the renderer (check digit computed)
pub const EAN13_MIN_LEN: usize = 12;
/// Longest EAN-13 payload accepted by the renderer (check digit included)
pub const EAN13_MAX_LEN: usize = 13;

/// Strip what scanners wrap around a payload
///
/// Removes leading/trailing whitespace, BOM and control characters. The group
/// separator is kept since it can terminate variable-length fields.
pub fn normalize_scan(raw: &str) -> String {
    raw.trim_matches(|c: char| {
        c != GROUP_SEPARATOR && (c.is_whitespace() || c.is_control() || c == '\u{FEFF}')
    })
    .to_string()
}

/// Prepare a field value for EAN-13 rendering
///
/// Values shorter than 12 digits are right-padded with `'0'`, values longer
/// than 13 are truncated to 13. Returns `None` for an empty value or one
/// containing non-digits.
pub fn ean13_payload(value: &str) -> Option<String> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut payload = value.to_string();
    if payload.len() < EAN13_MIN_LEN {
        payload.extend(std::iter::repeat_n('0', EAN13_MIN_LEN - payload.len()));
    } else if payload.len() > EAN13_MAX_LEN {
        payload.truncate(EAN13_MAX_LEN);
    }
    Some(payload)
}

/// Read element strings, one per line
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_payloads<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(normalize_scan)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

/// Render a result as `label: value` lines
pub fn format_result(result: &ParseResult) -> String {
    let mut out = String::new();
    for (name, value) in result.iter() {
        out.push_str(name.label());
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out
}
