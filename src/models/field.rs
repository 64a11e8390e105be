use std::fmt;

/// Semantic name of a decoded GS1 field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// GTIN / trade item number (AI 01)
    Sku,
    /// Expiration date, YYMMDD (AI 17)
    ExpirationDate,
    /// Batch or lot number (AI 10)
    LotNumber,
    /// Serial number (AI 21)
    SerialNumber,
    /// Unique device identifier (AI 240)
    Udi,
    /// Production date, YYMMDD (AI 11)
    ManufactureDate,
    /// Best before date, YYMMDD (AI 15)
    BestBefore,
}

impl FieldName {
    /// All field names in table order
    pub const ALL: [FieldName; 7] = [
        FieldName::Sku,
        FieldName::ExpirationDate,
        FieldName::LotNumber,
        FieldName::SerialNumber,
        FieldName::Udi,
        FieldName::ManufactureDate,
        FieldName::BestBefore,
    ];

    /// Display label used by downstream consumers
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Sku => "SKU",
            FieldName::ExpirationDate => "ExpirationDate",
            FieldName::LotNumber => "LotNumber",
            FieldName::SerialNumber => "SerialNumber",
            FieldName::Udi => "UDI",
            FieldName::ManufactureDate => "ManufactureDate",
            FieldName::BestBefore => "BestBefore",
        }
    }

    /// Look up a field by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One decoded element from the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    /// Semantic field name
    pub name: FieldName,
    /// Application Identifier prefix that introduced the field
    pub ai: &'static str,
    /// Raw payload, not type-converted
    pub value: String,
    /// Character index of the AI prefix
    pub start: usize,
    /// Character index where scanning resumed, clamped to the input length
    pub end: usize,
}
