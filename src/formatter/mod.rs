//! Text-to-CSV formatting
//!
//! Turns extracted document text into CSV rows:
//!
//! - **token.rs**: Token type and the numeric-literal classification
//! - **tokenize.rs**: whitespace splitting into an ordered token sequence
//! - **render.rs**: joining token fields into the final CSV text

pub mod render;
pub mod token;
pub mod tokenize;

pub use render::render;
pub use token::{is_numeric_literal, Token};
pub use tokenize::tokenize;
