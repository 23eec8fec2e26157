//! Output generation: the payload for each recipe, as JSON or as the script
//! replaying its commands once a page has loaded.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

mod builder;
mod payload;

pub use payload::*;

static SCRIPT: &'static str = r#"<script>
document.addEventListener('DOMContentLoaded', function () \{
{{ for call in calls }}    {call}
{{ endfor }}});
</script>
"#;

#[derive(Serialize)]
struct Context {
    calls: Vec<String>,
}

/// Serialize a whole page of outputs.
pub fn to_json(outputs: &[Output]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outputs)
}

/// Render the script that replays `triggers` once the page has loaded. With
/// nothing to replay there is no script at all.
pub fn to_script(triggers: &[Trigger]) -> Result<String, tinytemplate::error::Error> {
    if triggers.is_empty() {
        return Ok(String::new());
    }

    let calls: Vec<String> = triggers
        .iter()
        .map(call)
        .collect();

    debug!("Rendering script with {} calls", calls.len());

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("script", SCRIPT)?;

    tt.render("script", &Context { calls })
}

fn call(trigger: &Trigger) -> String {
    match trigger {
        Trigger::SelectVariant {
            target,
            nth,
            variant,
        } => format!(
            "ing_select('ing_name_{}', {}, '{}');",
            quote(target),
            nth,
            quote(variant)
        ),
        Trigger::SetTotal { target, nth, total } => format!(
            "ing_set_total('ing_name_{}', {}, '{}');",
            quote(target),
            nth,
            total
        ),
    }
}

/// Escape text for a single-quoted literal inside a `<script>` element. A
/// `<` is written as `\x3c` so no value can close the element.
fn quote(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\x3c")
}
