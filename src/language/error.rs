use std::{fmt, path::Path};

use super::quantity::Quantity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.problem, self.details)
        }
    }
}

/// Problems found while building a recipe. None of these stop the build;
/// they are collected and shown next to whatever could be produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeError {
    InvalidDepth {
        depth: usize,
        description: String,
    },
    DuplicateVariant(String),
    OverallAfterIngredients(Quantity),
    InvalidCommand {
        target: String,
        index: usize,
        text: String,
    },
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::InvalidDepth { depth, description } => {
                write!(f, "ingredient \"{}\" at level {}", description, depth)
            }
            RecipeError::DuplicateVariant(name) => write!(f, "duplicate variant \"{}\"", name),
            RecipeError::OverallAfterIngredients(quantity) => write!(
                f,
                "overall quantity \"{}\" declared after variants and/or ingredients",
                quantity
            ),
            RecipeError::InvalidCommand {
                target,
                index,
                text,
            } => write!(
                f,
                "invalid command \"{}\" for \"{}\" (#{})",
                text, target, index
            ),
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            RecipeError::InvalidDepth {
                depth: 0,
                description: "flour".to_string()
            }
            .to_string(),
            "ingredient \"flour\" at level 0"
        );
        assert_eq!(
            RecipeError::DuplicateVariant("vegan".to_string()).to_string(),
            "duplicate variant \"vegan\""
        );
        assert_eq!(
            RecipeError::OverallAfterIngredients(Quantity::Amount(6.0, "people".to_string()))
                .to_string(),
            "overall quantity \"6 people\" declared after variants and/or ingredients"
        );
        assert_eq!(
            RecipeError::InvalidCommand {
                target: "cake".to_string(),
                index: 2,
                text: "bake 20".to_string()
            }
            .to_string(),
            "invalid command \"bake 20\" for \"cake\" (#2)"
        );
    }

    #[test]
    fn loading_error_display() {
        let error = LoadingError {
            problem: "File not found".to_string(),
            details: String::new(),
            filename: Path::new("cake.txt"),
        };
        assert_eq!(error.to_string(), "File not found");
    }
}
