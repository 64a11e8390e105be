pub mod field;
pub mod parse_result;

pub use field::{FieldName, ParsedField};
pub use parse_result::ParseResult;
