//! Variable-length field termination
//!
//! GS1 terminates variable-length fields with FNC1, transmitted as the ASCII
//! group separator. Payloads seen in practice often arrive with the separator
//! stripped, so the default rule looks for the literal start of the UDI
//! element instead.

/// Literal marker that ends a variable-length field by default
pub const UDI_MARKER: &str = "240";

/// ASCII group separator (FNC1 in transmitted data)
pub const GROUP_SEPARATOR: char = '\u{1D}';

/// Rule used to find the end of a variable-length payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    /// End at the next `"240"` substring, else end of input
    ///
    /// A payload that itself contains `240` is cut short there.
    #[default]
    Marker,
    /// End at the next group separator, falling back to [`Terminator::Marker`]
    GroupSeparator,
}

impl Terminator {
    /// Parse a terminator name (`marker` or `gs`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "marker" | "240" => Some(Terminator::Marker),
            "gs" | "group-separator" | "fnc1" => Some(Terminator::GroupSeparator),
            _ => None,
        }
    }

    /// Index of the terminator at or after `from`, or `None` if the payload
    /// runs to the end of input
    pub fn find(&self, input: &[char], from: usize) -> Option<usize> {
        match self {
            Terminator::Marker => find_marker(input, from),
            Terminator::GroupSeparator => input
                .get(from..)
                .and_then(|rest| rest.iter().position(|&c| c == GROUP_SEPARATOR))
                .map(|offset| from + offset)
                .or_else(|| find_marker(input, from)),
        }
    }
}

fn find_marker(input: &[char], from: usize) -> Option<usize> {
    let marker: Vec<char> = UDI_MARKER.chars().collect();
    let rest = input.get(from..)?;
    rest.windows(marker.len())
        .position(|w| w == marker.as_slice())
        .map(|offset| from + offset)
}
