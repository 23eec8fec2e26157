// Turning recipe outputs into styled text

pub mod formatter;
mod syntax;

pub use formatter::{format_output, format_page};
pub use syntax::*;
