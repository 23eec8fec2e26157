//! Compiled regular expressions, built once and then shared

mod cache;

pub(crate) use cache::regex;
