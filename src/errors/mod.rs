//! Diagnostics produced by the parser.
//!
//! Syntax problems never abort a parse. Each one becomes an [`errors::Error`]
//! carrying:
//!
//! - The specific problem as an [`errors::ErrorImpl`] variant
//! - The source position of the offending token
//! - A name and an optional tip for rendering

pub mod errors;
