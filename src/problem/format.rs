use ingredients::{language::LoadingError, scaling::ScalingError};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

/// Format a problem recorded while reading the `recipe`-th block (from 1)
/// of a file.
pub fn concise_recipe_warning(filename: &Path, recipe: usize, message: &str) -> String {
    format!(
        "{}: {}#{} {}",
        "warning".bright_yellow(),
        filename.to_string_lossy(),
        recipe,
        message.bold()
    )
}

/// Format a command that could not be carried out on the assembled page.
pub fn concise_scaling_error(filename: &Path, error: &ScalingError) -> String {
    format!(
        "{}: {} {}",
        "warning".bright_yellow(),
        filename.to_string_lossy(),
        error
            .to_string()
            .bold()
    )
}
