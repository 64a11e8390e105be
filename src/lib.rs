//! gs1_parser - GS1 Application Identifier element-string parser
//!
//! Splits the data payload of a GS1-128 or GS1 DataMatrix barcode into named
//! fields (SKU, lot, serial, dates, UDI). Parsing is total: malformed input
//! degrades to a partial result instead of an error.
//!
//! ```
//! use gs1_parser::{FieldName, parse};
//!
//! let result = parse("010871472998502017260626212294602400304215383");
//! assert_eq!(result.get(FieldName::Sku), Some("08714729985020"));
//! assert_eq!(result.get(FieldName::Udi), Some("0304215383"));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Element-string decoding (AI table, terminators, scanner)
pub mod decoder;
/// Core data structures (FieldName, ParsedField, ParseResult)
pub mod models;
/// Helpers for scanner input and downstream consumers
pub mod tools;

pub use decoder::config::ScanOptions;
pub use decoder::terminator::Terminator;
pub use models::{FieldName, ParseResult, ParsedField};

use decoder::tokenizer::Tokenizer;
use rayon::prelude::*;

/// Parse a GS1 element string into an ordered field mapping
///
/// # Arguments
/// * `input` - Raw element string, digits in practice
///
/// # Returns
/// Fields in first-encounter order. A repeated AI overwrites the earlier value.
pub fn parse(input: &str) -> ParseResult {
    Tokenizer::new().parse(input)
}

/// Parse with explicit scanner settings
pub fn parse_with_options(input: &str, options: ScanOptions) -> ParseResult {
    Tokenizer::with_options(options).parse(input)
}

/// Every decoded element with its AI and character span, repeats included
pub fn tokenize(input: &str) -> Vec<ParsedField> {
    Tokenizer::new().tokenize(input)
}

/// Parse many element strings in parallel
///
/// Results are returned in input order.
pub fn parse_batch<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<ParseResult> {
    Parser::new().parse_batch(inputs)
}

/// Reusable parser with configured scanner settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    tokenizer: Tokenizer,
}

impl Parser {
    /// Parser with reference settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with explicit settings
    pub fn with_options(options: ScanOptions) -> Self {
        Self {
            tokenizer: Tokenizer::with_options(options),
        }
    }

    /// Parser configured from `GS1_TERMINATOR` and `GS1_MAX_INPUT_LEN`
    pub fn from_env() -> Self {
        Self::with_options(ScanOptions::from_env())
    }

    /// Settings in use
    pub fn options(&self) -> &ScanOptions {
        self.tokenizer.options()
    }

    /// Parse one element string
    pub fn parse(&self, input: &str) -> ParseResult {
        self.tokenizer.parse(input)
    }

    /// Token stream for one element string
    pub fn tokenize(&self, input: &str) -> Vec<ParsedField> {
        self.tokenizer.tokenize(input)
    }

    /// Parse many element strings in parallel, preserving input order
    pub fn parse_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<ParseResult> {
        inputs
            .par_iter()
            .map(|input| self.tokenizer.parse(input.as_ref()))
            .collect()
    }
}
