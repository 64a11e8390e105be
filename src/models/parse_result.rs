use super::{FieldName, ParsedField};

/// Ordered field name -> value mapping produced by a parse
///
/// Keys keep the position of their first occurrence. A repeated field
/// overwrites the stored value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    entries: Vec<(FieldName, String)>,
}

impl ParseResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the field was already set
    pub fn insert(&mut self, name: FieldName, value: String) -> Option<String> {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Value for a field, if present
    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value for a field looked up by its label ("SKU", "UDI", ...)
    pub fn get_by_label(&self, label: &str) -> Option<&str> {
        FieldName::from_label(label).and_then(|name| self.get(name))
    }

    /// Check whether a field was decoded
    pub fn contains(&self, name: FieldName) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate fields in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Field names in first-encounter order
    pub fn names(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }
}

impl FromIterator<ParsedField> for ParseResult {
    fn from_iter<I: IntoIterator<Item = ParsedField>>(iter: I) -> Self {
        let mut result = ParseResult::new();
        for field in iter {
            result.insert(field.name, field.value);
        }
        result
    }
}

impl IntoIterator for ParseResult {
    type Item = (FieldName, String);
    type IntoIter = std::vec::IntoIter<(FieldName, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_wins_keeps_position() {
        let mut result = ParseResult::new();
        assert_eq!(result.insert(FieldName::LotNumber, "A1".to_string()), None);
        result.insert(FieldName::Udi, "0304215383".to_string());
        let previous = result.insert(FieldName::LotNumber, "B2".to_string());

        assert_eq!(previous.as_deref(), Some("A1"));
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(FieldName::LotNumber), Some("B2"));
        let names: Vec<FieldName> = result.names().collect();
        assert_eq!(names, vec![FieldName::LotNumber, FieldName::Udi]);
    }

    #[test]
    fn test_get_by_label() {
        let mut result = ParseResult::new();
        result.insert(FieldName::Sku, "08714729985020".to_string());
        assert_eq!(result.get_by_label("SKU"), Some("08714729985020"));
        assert_eq!(result.get_by_label("UDI"), None);
        assert_eq!(result.get_by_label("Nope"), None);
    }

    #[test]
    fn test_empty() {
        let result = ParseResult::new();
        assert!(result.is_empty());
        assert_eq!(result.iter().count(), 0);
        assert!(!result.contains(FieldName::Sku));
    }
}
