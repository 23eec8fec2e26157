use crate::formatting::*;
use crate::output::Output;

/// We do the rendering in two passes. First we convert the recipe outputs
/// into a Vec of "fragments" (Syntax tag, String pairs). Then second we
/// apply the specified renderer to each pair to result in an embellished
/// String.
pub fn render(renderer: &impl Render, outputs: &[Output]) -> String {
    // Pass 1: lay out outputs as tagged fragments
    let fragments = format_page(outputs);

    // Pass 2: render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
