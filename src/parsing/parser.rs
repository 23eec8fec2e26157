//! Classifying single lines of an ingredient block

use crate::language::{Action, Amount, Quantity, Unit};
use crate::regex::*;

/// The words introducing each kind of directive. Matching is exact and
/// must be followed by whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    pub variant: String,
    pub overall: String,
    pub command: String,
    pub select: String,
    pub total: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords {
            variant: "variant".to_string(),
            overall: "overall".to_string(),
            command: "command".to_string(),
            select: "variant".to_string(),
            total: "total".to_string(),
        }
    }
}

impl Keywords {
    /// The keywords as written in the French wiki pages this format grew up
    /// on.
    pub fn french() -> Self {
        Keywords {
            variant: "option".to_string(),
            overall: "quantité".to_string(),
            command: "commande".to_string(),
            select: "variante".to_string(),
            total: "total".to_string(),
        }
    }

    /// Look up a keyword set by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "english" => Some(Keywords::default()),
            "french" => Some(Keywords::french()),
            _ => None,
        }
    }
}

/// One classified line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'i> {
    Variant(&'i str),
    Overall(Quantity),
    Command {
        id: &'i str,
        index: usize,
        action: Result<Action, &'i str>,
    },
    Ingredient {
        depth: usize,
        amount: Amount,
        unit: Unit,
        description: &'i str,
    },
}

/// Classify a non-empty line. Directives are tried first, in the order
/// variant, overall quantity, command; anything else is an ingredient. This
/// never fails: a line that fits nowhere is an ingredient whose whole text
/// is its description.
pub fn parse_line<'i>(keywords: &Keywords, line: &'i str) -> Line<'i> {
    if let Some(name) = read_variant(keywords, line) {
        return Line::Variant(name);
    }

    if let Some(quantity) = read_overall(keywords, line) {
        return Line::Overall(quantity);
    }

    if let Some(command) = read_command(keywords, line) {
        return command;
    }

    read_ingredient(line)
}

/// If `content` starts with `keyword` followed by whitespace, return what
/// comes after, trimmed.
fn strip_keyword<'i>(content: &'i str, keyword: &str) -> Option<&'i str> {
    let rest = content.strip_prefix(keyword)?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn read_variant<'i>(keywords: &Keywords, line: &'i str) -> Option<&'i str> {
    strip_keyword(line.trim_start(), &keywords.variant)
}

fn read_overall(keywords: &Keywords, line: &str) -> Option<Quantity> {
    let rest = strip_keyword(line.trim_start(), &keywords.overall)?;

    let re = regex!(r"^(?:([0-9]+(?:\.[0-9]+)?)(?:\s+|$))?(.*)$");
    let cap = re.captures(rest)?;

    let description = cap
        .get(2)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .trim()
        .to_string();

    match cap
        .get(1)
        .and_then(|m| {
            m.as_str()
                .parse::<f64>()
                .ok()
        }) {
        Some(amount) => Some(Quantity::Amount(amount, description)),
        None => Some(Quantity::Named(description)),
    }
}

fn read_command<'i>(keywords: &Keywords, line: &'i str) -> Option<Line<'i>> {
    let rest = line.strip_prefix(keywords.command.as_str())?;

    let re = regex!(r#"^\s+"([^"]*)"\s+(?:([0-9]+)\s*)?(.*?)\s*$"#);
    let cap = re.captures(rest)?;

    let id = cap
        .get(1)?
        .as_str();

    // an index too large to count is as wrong as a zero one
    let index = match cap.get(2) {
        Some(m) => m
            .as_str()
            .parse()
            .unwrap_or(0),
        None => 1,
    };

    let text = cap
        .get(3)?
        .as_str();

    Some(Line::Command {
        id,
        index,
        action: read_action(keywords, text),
    })
}

/// Interpret the action part of a command.
pub fn read_action<'i>(keywords: &Keywords, text: &'i str) -> Result<Action, &'i str> {
    let content = text.trim();

    if let Some(name) = strip_keyword(content, &keywords.select) {
        return Ok(Action::SelectVariant(name.to_string()));
    }

    if let Some(number) = strip_keyword(content, &keywords.total) {
        let re = regex!(r"^[0-9]+(?:\.[0-9]+)?$");
        if re.is_match(number) {
            if let Ok(total) = number.parse::<f64>() {
                return Ok(Action::SetTotal(total));
            }
        }
    }

    Err(text)
}

/// Depth from a marker run: the indentation before a single `*` counts two
/// columns per level, so `n` characters of marker give `(n - 1) / 2`, never
/// less than 1. Every further `*` goes one level deeper.
fn marker_depth(indent: &str, stars: &str) -> usize {
    let n = indent
        .chars()
        .count()
        + 1;
    let base = ((n - 1) / 2).max(1);

    base + stars.len() - 1
}

fn read_ingredient(line: &str) -> Line<'_> {
    let re = regex!(r"^(\s*)(\*+)(.*)$");

    let Some(cap) = re.captures(line) else {
        return unmarked(line);
    };

    let (Some(indent), Some(stars), Some(rest)) = (cap.get(1), cap.get(2), cap.get(3)) else {
        return unmarked(line);
    };

    let depth = marker_depth(indent.as_str(), stars.as_str());
    let rest = rest
        .as_str()
        .trim();

    let re = regex!(r"^([0-9]+(?:\.[0-9]+)?)\s*(.*)$");

    let Some(cap) = re.captures(rest) else {
        return Line::Ingredient {
            depth,
            amount: Amount::Absent,
            unit: Unit::Unspecified,
            description: rest,
        };
    };

    let amount = match cap
        .get(1)
        .and_then(|m| {
            m.as_str()
                .parse::<f64>()
                .ok()
        }) {
        Some(amount) => Amount::Given(amount),
        None => return unmarked(line),
    };

    let remainder = cap
        .get(2)
        .map(|m| m.as_str())
        .unwrap_or_default();

    let (unit, description) = read_unit(remainder);

    Line::Ingredient {
        depth,
        amount,
        unit,
        description,
    }
}

/// Split a recognized unit off the front of `content`. Only the gram family
/// and millilitres are units; they must stand alone as a word.
fn read_unit(content: &str) -> (Unit, &str) {
    let re = regex!(r"^((?:gr?|ml)\.?)(?:\s+|$)(.*)$");

    match re.captures(content) {
        Some(cap) => {
            let unit = cap
                .get(1)
                .map(|m| Unit::normalize(m.as_str()))
                .unwrap_or(Unit::Unspecified);
            let description = cap
                .get(2)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .trim();
            (unit, description)
        }
        None => (Unit::Unspecified, content.trim()),
    }
}

fn unmarked(line: &str) -> Line<'_> {
    Line::Ingredient {
        depth: 1,
        amount: Amount::Absent,
        unit: Unit::Unspecified,
        description: line.trim(),
    }
}
