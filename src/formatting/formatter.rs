//! Laying out recipe outputs as tagged text fragments

#[cfg(test)]
use std::fmt;

use crate::formatting::*;
use crate::language::display_amount;
use crate::output::*;

/// Format every recipe of a page, separated by blank lines.
pub fn format_page(outputs: &[Output]) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for (i, recipe) in outputs
        .iter()
        .enumerate()
    {
        if i > 0 {
            output.append(Syntax::Newline, "\n");
        }
        output.append_output(recipe);
    }

    output.fragments
}

pub fn format_output(recipe: &Output) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();
    output.append_output(recipe);
    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    nesting: usize,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            nesting: 0,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_char(&mut self, c: char) {
        self.fragments
            .push((Syntax::Neutral, c.to_string()));
    }

    fn newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    #[cfg(test)]
    fn reset(&mut self) {
        self.fragments
            .clear();
        self.nesting = 0;
    }

    fn increase(&mut self, depth: usize) {
        self.nesting += depth;
    }

    fn decrease(&mut self, depth: usize) {
        self.nesting = self
            .nesting
            .saturating_sub(depth);
    }

    fn indent(&mut self) {
        if self.nesting > 0 {
            let spaces = " ".repeat(self.nesting);
            self.append(Syntax::Indent, &spaces);
        }
    }

    fn append_output(&mut self, recipe: &Output) {
        for error in &recipe.errors {
            self.append_warning(error);
        }

        if let Some(names) = &recipe.selector {
            self.append_selector(recipe, names);
        }

        for variant in &recipe.variants {
            if variant.visible {
                self.append_variant(variant);
            }
        }
    }

    fn append_warning(&mut self, message: &str) {
        self.append(Syntax::Warning, "warning");
        self.append(Syntax::Neutral, ": ");
        self.append(Syntax::Description, message);
        self.newline();
    }

    fn append_selector(&mut self, recipe: &Output, names: &[String]) {
        self.append(Syntax::Label, "Variants:");

        for (i, name) in names
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append_char(',');
            }
            self.append_char(' ');

            let chosen = recipe
                .variants
                .iter()
                .any(|variant| variant.visible && variant.name.as_deref() == Some(name));

            if chosen {
                self.append(Syntax::Variant, name);
            } else {
                self.append(Syntax::Selector, name);
            }
        }

        self.newline();
    }

    fn append_variant(&mut self, variant: &VariantOutput) {
        if let Some(name) = &variant.name {
            self.append(Syntax::Variant, name);
            self.append_char(':');
            self.newline();
        }

        for node in &variant.tree {
            self.append_node(variant, node);
        }

        self.append_total(variant);
    }

    fn append_node(&mut self, variant: &VariantOutput, node: &NodeOutput) {
        self.indent();
        self.append(Syntax::Bullet, "*");

        let value = node
            .field
            .and_then(|index| {
                variant
                    .fields
                    .get(index)
            });

        if let Some(field) = value {
            self.append_char(' ');
            self.append(Syntax::Numeric, &display_amount(field.value));
        }

        if value.is_some() && !node
            .unit
            .is_empty()
        {
            self.append_char(' ');
            self.append(Syntax::Unit, &node.unit);
        }

        if !node
            .description
            .is_empty()
        {
            self.append_char(' ');
            if node.placeholder {
                self.append(Syntax::Placeholder, &node.description);
            } else {
                self.append(Syntax::Description, &node.description);
            }
        }

        self.newline();

        self.increase(2);
        for child in &node.children {
            self.append_node(variant, child);
        }
        self.decrease(2);
    }

    fn append_total(&mut self, variant: &VariantOutput) {
        self.append(Syntax::Label, "For a total of");

        let mut first = true;

        for overall in &variant.overall {
            let Some(field) = variant
                .fields
                .get(overall.field)
            else {
                continue;
            };

            self.separator(&mut first);
            self.append(Syntax::Numeric, &display_amount(field.value));
            if !overall
                .description
                .is_empty()
            {
                self.append_char(' ');
                self.append(Syntax::Description, &overall.description);
            }
        }

        if let Some(field) = variant.total_field() {
            self.separator(&mut first);
            self.append(Syntax::Numeric, &display_amount(field.value));

            if !variant
                .total
                .unit
                .is_empty()
            {
                self.append_char(' ');
                self.append(Syntax::Unit, &variant.total.unit);
            }

            if let Some(label) = &variant
                .total
                .label
            {
                self.append(Syntax::Neutral, " of ");
                self.append(Syntax::Description, label);
            }
        }

        self.newline();
    }

    fn separator(&mut self, first: &mut bool) {
        if *first {
            *first = false;
        } else {
            self.append_char(',');
        }
        self.append_char(' ');
    }
}

#[cfg(test)]
impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, content) in &self.fragments {
            f.write_str(content)?;
        }
        Ok(())
    }
}
