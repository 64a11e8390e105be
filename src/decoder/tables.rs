use crate::models::FieldName;

/// How the payload following an AI is delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
    /// Exactly this many characters follow the prefix
    Fixed(usize),
    /// Payload runs until a terminator or the end of input
    Variable,
}

/// One row of the Application Identifier table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiRule {
    /// ASCII prefix, 2 or 3 characters
    pub prefix: &'static str,
    /// Field the payload is stored under
    pub field: FieldName,
    /// Payload length rule
    pub payload: PayloadRule,
}

impl AiRule {
    const fn new(prefix: &'static str, field: FieldName, payload: PayloadRule) -> Self {
        Self {
            prefix,
            field,
            payload,
        }
    }

    /// Prefix length in characters
    pub fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    /// Check if the prefix starts at `pos`
    pub fn matches_at(&self, input: &[char], pos: usize) -> bool {
        let rest = input.get(pos..).unwrap_or(&[]);
        rest.len() >= self.prefix.len()
            && self.prefix.chars().zip(rest).all(|(p, &c)| p == c)
    }
}

/// Supported Application Identifiers in priority order
// Checked top to bottom at every cursor position. Order is the tie-break
// between overlapping prefixes, do not sort.
pub const AI_TABLE: [AiRule; 7] = [
    AiRule::new("01", FieldName::Sku, PayloadRule::Fixed(14)),
    AiRule::new("17", FieldName::ExpirationDate, PayloadRule::Fixed(6)),
    AiRule::new("10", FieldName::LotNumber, PayloadRule::Variable),
    AiRule::new("21", FieldName::SerialNumber, PayloadRule::Variable),
    AiRule::new("240", FieldName::Udi, PayloadRule::Fixed(10)),
    AiRule::new("11", FieldName::ManufactureDate, PayloadRule::Fixed(6)),
    AiRule::new("15", FieldName::BestBefore, PayloadRule::Fixed(6)),
];

/// First rule in priority order whose prefix starts at `pos`
pub fn rule_at(input: &[char], pos: usize) -> Option<&'static AiRule> {
    AI_TABLE.iter().find(|rule| rule.matches_at(input, pos))
}
