//! GS1 element-string decoding
//!
//! This module contains the scanner and its supporting pieces:
//! - The Application Identifier table and its priority order
//! - Variable-length field terminators
//! - Scanner settings and environment overrides

/// Scanner settings and environment overrides
pub mod config;
/// Application Identifier table (prefix, field, payload rule)
pub mod tables;
/// Variable-length field terminator search
pub mod terminator;
/// Left-to-right element-string scanner
pub mod tokenizer;
