//! Types representing a nested list of ingredients

use std::fmt;

/// Description carried by the placeholder ingredient that stands in for a
/// nesting level the author skipped.
pub const PLACEHOLDER: &str = "??";

/// How much of an ingredient is called for. Lines without a leading number
/// have no amount at all, which is different from an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Absent,
    Given(f64),
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Absent => None,
            Amount::Given(number) => Some(*number),
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Amount::Given(number) if *number > 0.0)
    }
}

/// Unit of an amount. `Mixed` never comes out of parsing; it is what a total
/// reports when its contributors disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Unspecified,
    Symbol(String),
    Mixed,
}

impl Unit {
    /// Normalize a unit as written: anything in the gram family becomes
    /// `g.`, and every other unit gets a trailing dot if it lacks one.
    pub fn normalize(raw: &str) -> Unit {
        let raw = raw.trim();

        if raw.is_empty() {
            return Unit::Unspecified;
        }

        let mut symbol = if raw.starts_with('g') {
            "g".to_string()
        } else {
            raw.to_string()
        };

        if !symbol.ends_with('.') {
            symbol.push('.');
        }

        Unit::Symbol(symbol)
    }

    pub fn is_specified(&self) -> bool {
        *self != Unit::Unspecified
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Unspecified => Ok(()),
            Unit::Symbol(symbol) => f.write_str(symbol),
            Unit::Mixed => f.write_str("-"),
        }
    }
}

/// A single ingredient line, possibly heading a nested list of its own
/// sub-ingredients.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub amount: Amount,
    pub unit: Unit,
    pub description: String,
    placeholder: bool,
    nested: Option<IngredientList>,
}

impl Ingredient {
    pub fn new(amount: Amount, unit: Unit, description: impl Into<String>) -> Ingredient {
        Ingredient {
            amount,
            unit,
            description: description.into(),
            placeholder: false,
            nested: None,
        }
    }

    /// The stand-in used to fill a level that was skipped in the input.
    pub fn placeholder() -> Ingredient {
        Ingredient {
            amount: Amount::Absent,
            unit: Unit::Unspecified,
            description: PLACEHOLDER.to_string(),
            placeholder: true,
            nested: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn nested(&self) -> Option<&IngredientList> {
        self.nested
            .as_ref()
    }

    /// Place `ingredient` somewhere below this one. `current` is the level of
    /// the list owning this ingredient and `depth` the level the new
    /// ingredient must end up at. Missing intermediate levels are bridged
    /// with placeholder lists, one level at a time.
    pub fn nest(&mut self, current: usize, depth: usize, ingredient: Ingredient) {
        if self
            .nested
            .is_none()
        {
            let next = current + 1;

            if depth == next {
                self.nested = Some(IngredientList::from_ingredient(next, ingredient));
                return;
            }

            self.nested = Some(IngredientList::dummy(next));
        }

        if let Some(list) = self
            .nested
            .as_mut()
        {
            list.add_ingredient(depth, ingredient);
        }
    }
}

/// An ordered list of ingredients at one nesting level. A list is never
/// empty: both constructors seed it with an ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientList {
    level: usize,
    items: Vec<Ingredient>,
}

impl IngredientList {
    /// Start a list at `level` holding `ingredient`. Levels below 1 are
    /// raised to 1.
    pub fn from_ingredient(level: usize, ingredient: Ingredient) -> IngredientList {
        IngredientList {
            level: level.max(1),
            items: vec![ingredient],
        }
    }

    /// Start a list at `level` holding only a placeholder, to be filled in
    /// by whatever gets nested beneath it.
    pub fn dummy(level: usize) -> IngredientList {
        IngredientList::from_ingredient(level, Ingredient::placeholder())
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    /// Add `ingredient` at `depth`. At this list's own level it is appended;
    /// deeper than that it descends into the last ingredient of the list.
    /// Depths shallower than this list are appended here as well, there
    /// being no parent to hand them back to.
    pub fn add_ingredient(&mut self, depth: usize, ingredient: Ingredient) {
        if depth <= self.level {
            self.items
                .push(ingredient);
            return;
        }

        let level = self.level;
        match self
            .items
            .last_mut()
        {
            Some(last) => last.nest(level, depth, ingredient),
            None => self
                .items
                .push(ingredient),
        }
    }
}
