use once_cell::sync::Lazy;
use regex::Regex;

/// Lines starting with this marker are register records, everything else is
/// tool chatter.
pub const RECORD_MARKER: char = '>';

// marker, direction token (ignored), key, '=', value
static RECORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^>\s+\S+\s+(\S+)\s*=\s*(\S+)").expect("record pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A well-formed register record.
    Record { key: String, value: String },
    /// Starts with the record marker but does not match the record pattern.
    Malformed,
    /// Not telemetry; forwarded unchanged.
    Passthrough,
}

pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim();
    if !line.starts_with(RECORD_MARKER) {
        return LineClass::Passthrough;
    }
    match RECORD_PATTERN.captures(line) {
        Some(captures) => LineClass::Record {
            key: captures[1].trim().to_owned(),
            value: captures[2].trim().to_owned(),
        },
        None => LineClass::Malformed,
    }
}
