//! Nested recipe ingredient lists: reading them from plain text, totalling
//! their weights, and scaling every amount in proportion when the reader
//! changes one.

pub mod formatting;
pub mod language;
pub mod output;
pub mod parsing;
mod regex;
pub mod rendering;
pub mod scaling;
