//! Reading ingredient blocks into recipes

use std::path::Path;
use tracing::{debug, info};

use crate::language::{LoadingError, Recipe};
use crate::regex::*;

pub mod parser;

pub use parser::{parse_line, read_action, Keywords, Line};

/// Read a file and return an owned String. The caller keeps ownership so
/// that blocks extracted from it can borrow from the content.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Find the `<ingredients>…</ingredients>` blocks within a page. Content
/// without any such tags is taken to be a single block in its entirety.
pub fn extract(content: &str) -> Vec<&str> {
    let re = regex!(r"(?s)<ingredients[^>]*>(.*?)</ingredients>");

    let blocks: Vec<&str> = re
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect();

    if blocks.is_empty() {
        debug!("No ingredient tags, using whole content");
        vec![content]
    } else {
        debug!(
            "Found {} ingredient block{}",
            blocks.len(),
            if blocks.len() == 1 { "" } else { "s" }
        );
        blocks
    }
}

/// Build a recipe from one block of text, one directive or ingredient per
/// line. Blank lines are ignored. Nothing here fails; problems are recorded
/// in the recipe's error log.
pub fn parse(keywords: &Keywords, block: &str) -> Recipe {
    let mut recipe = Recipe::new();

    for line in block.lines() {
        if line
            .trim()
            .is_empty()
        {
            continue;
        }

        match parse_line(keywords, line) {
            Line::Variant(name) => recipe.add_variant(name),
            Line::Overall(quantity) => recipe.set_overall_quantity(quantity),
            Line::Command { id, index, action } => recipe.add_command(id, index, action),
            Line::Ingredient {
                depth,
                amount,
                unit,
                description,
            } => recipe.add_raw_ingredient(depth, amount, unit, description),
        }
    }

    let variants = recipe
        .variants()
        .count();
    let errors = recipe
        .errors()
        .len();

    info!(
        "Parsed recipe with {} variant{} and {} error{}",
        variants,
        if variants == 1 { "" } else { "s" },
        errors,
        if errors == 1 { "" } else { "s" }
    );

    recipe
}

/// Parse every block found in a page.
pub fn parse_page(keywords: &Keywords, content: &str) -> Vec<Recipe> {
    extract(content)
        .into_iter()
        .map(|block| parse(keywords, block))
        .collect()
}
