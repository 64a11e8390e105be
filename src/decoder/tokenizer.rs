use crate::debug::debug_enabled;
use crate::decoder::config::ScanOptions;
use crate::decoder::tables::{AiRule, PayloadRule, rule_at};
use crate::models::{ParseResult, ParsedField};

/// Left-to-right scanner over a GS1 element string
///
/// The scan never fails: unknown characters are skipped one at a time and
/// fixed-length payloads that run past the end of input are truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    options: ScanOptions,
}

impl Tokenizer {
    /// Tokenizer with reference settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer with explicit settings
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Settings in use
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Every decoded element in scan order, repeats included
    pub fn tokenize(&self, input: &str) -> Vec<ParsedField> {
        let mut chars: Vec<char> = input.chars().collect();
        if let Some(max) = self.options.max_input_len {
            if chars.len() > max {
                if debug_enabled() {
                    eprintln!(
                        "GS1: clamping input from {} to {} characters",
                        chars.len(),
                        max
                    );
                }
                chars.truncate(max);
            }
        }

        let len = chars.len();
        let mut fields = Vec::new();
        let mut i = 0;

        while i < len {
            let Some(rule) = rule_at(&chars, i) else {
                if debug_enabled() {
                    eprintln!("GS1: no AI at {}, skipping {:?}", i, chars[i]);
                }
                i += 1;
                continue;
            };

            let (value, next) = self.decode_payload(&chars, i, rule);
            fields.push(ParsedField {
                name: rule.field,
                ai: rule.prefix,
                value,
                start: i,
                end: next.min(len),
            });
            i = next;
        }

        fields
    }

    /// Last-wins mapping of the token stream
    pub fn parse(&self, input: &str) -> ParseResult {
        self.tokenize(input).into_iter().collect()
    }

    /// Returns (payload, next cursor). The cursor may land past the end
    /// of input for truncated fixed-length fields.
    fn decode_payload(&self, chars: &[char], pos: usize, rule: &AiRule) -> (String, usize) {
        let len = chars.len();
        let start = pos + rule.prefix_len();

        match rule.payload {
            PayloadRule::Fixed(width) => {
                let next = start + width;
                if next > len && debug_enabled() {
                    eprintln!(
                        "GS1: AI {} at {} truncated to {} of {} characters",
                        rule.prefix,
                        pos,
                        len.saturating_sub(start),
                        width
                    );
                }
                (collect(chars, start, next), next)
            }
            PayloadRule::Variable => {
                let end = self.options.terminator.find(chars, start).unwrap_or(len);
                if debug_enabled() {
                    eprintln!(
                        "GS1: AI {} at {} runs to {} ({:?})",
                        rule.prefix, pos, end, self.options.terminator
                    );
                }
                (collect(chars, start, end), end)
            }
        }
    }
}

fn collect(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::terminator::Terminator;
    use crate::models::FieldName;

    #[test]
    fn test_fixed_length_sku() {
        let fields = Tokenizer::new().tokenize("0112345678901234");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, FieldName::Sku);
        assert_eq!(fields[0].ai, "01");
        assert_eq!(fields[0].value, "12345678901234");
        assert_eq!((fields[0].start, fields[0].end), (0, 16));
    }

    #[test]
    fn test_truncated_fixed_field_ends_scan() {
        let fields = Tokenizer::new().tokenize("1726");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, "26");
        assert_eq!(fields[0].end, 4);
    }

    #[test]
    fn test_prefix_only() {
        let fields = Tokenizer::new().tokenize("240");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, FieldName::Udi);
        assert_eq!(fields[0].value, "");
    }

    #[test]
    fn test_variable_field_stops_at_marker() {
        let fields = Tokenizer::new().tokenize("10ABC240XYZ1234567890");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].value, "ABC");
        assert_eq!(fields[0].end, 5);
        assert_eq!(fields[1].name, FieldName::Udi);
        assert_eq!(fields[1].start, 5);
        assert_eq!(fields[1].value, "XYZ1234567");
    }

    #[test]
    fn test_skips_unknown_characters() {
        let fields = Tokenizer::new().tokenize("XX0112345678901234");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].start, 2);
        assert_eq!(fields[0].value, "12345678901234");
    }

    #[test]
    fn test_repeats_kept_in_stream() {
        let fields = Tokenizer::new().tokenize("1126010111260202");
        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["260101", "260202"]);

        let result = Tokenizer::new().parse("1126010111260202");
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(FieldName::ManufactureDate), Some("260202"));
    }

    #[test]
    fn test_non_ascii_does_not_split_characters() {
        let result = Tokenizer::new().parse("10lötß");
        assert_eq!(result.get(FieldName::LotNumber), Some("lötß"));
        let result = Tokenizer::new().parse("é17ü");
        assert_eq!(result.get(FieldName::ExpirationDate), Some("ü"));
    }

    #[test]
    fn test_group_separator_terminator() {
        let tokenizer = Tokenizer::with_options(
            ScanOptions::default().with_terminator(Terminator::GroupSeparator),
        );
        let result = tokenizer.parse("10LOT240A\u{1D}17260626");
        assert_eq!(result.get(FieldName::LotNumber), Some("LOT240A"));
        assert_eq!(result.get(FieldName::ExpirationDate), Some("260626"));
        assert!(!result.contains(FieldName::Udi));
    }

    #[test]
    fn test_max_input_len_clamps() {
        let tokenizer = Tokenizer::with_options(ScanOptions::default().with_max_input_len(8));
        let result = tokenizer.parse("0108714729985020");
        assert_eq!(result.get(FieldName::Sku), Some("087147"));
    }
}
