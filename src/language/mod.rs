// Types representing a recipe's ingredients

mod error;
mod quantity;
mod recipe;
mod types;
mod weight;

// Re-export all public symbols
pub use error::*;
pub use quantity::*;
pub use recipe::*;
pub use types::*;
pub use weight::*;
