//! The recipe as a whole: its variants, overall quantities, commands, and
//! everything that went wrong while reading it.

use indexmap::IndexMap;
use tracing::debug;

use super::error::RecipeError;
use super::quantity::Quantity;
use super::types::{Amount, Ingredient, IngredientList, Unit};

/// Deepest nesting level accepted for an ingredient. Trees are walked
/// recursively, so anything deeper is refused rather than followed.
pub const MAX_DEPTH: usize = 64;

/// Key of a variant. Ingredients given before any variant is declared go
/// into `Unnamed`, which no user-chosen name can collide with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    Unnamed,
    Named(String),
}

impl Variant {
    pub fn name(&self) -> Option<&str> {
        match self {
            Variant::Unnamed => None,
            Variant::Named(name) => Some(name),
        }
    }
}

/// What a command asks the page to do once it is live.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectVariant(String),
    SetTotal(f64),
}

/// An instruction aimed at the `index`-th recipe (counting from 1) whose
/// overall quantities name `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub target: String,
    pub index: usize,
    pub action: Action,
}

#[derive(Debug, Clone, Default)]
pub struct Recipe {
    variants: IndexMap<Variant, Option<IngredientList>>,
    overall: Vec<Quantity>,
    commands: Vec<Command>,
    errors: Vec<RecipeError>,
    current: Option<Variant>,
}

impl Recipe {
    pub fn new() -> Recipe {
        Recipe::default()
    }

    /// Declare a new variant and make it the one ingredients go into.
    pub fn add_variant(&mut self, name: &str) {
        self.insert_variant(Variant::Named(name.to_string()));
    }

    fn insert_variant(&mut self, variant: Variant) {
        if self
            .variants
            .contains_key(&variant)
        {
            let name = variant
                .name()
                .unwrap_or_default()
                .to_string();
            self.errors
                .push(RecipeError::DuplicateVariant(name));
            return;
        }

        debug!(?variant, "starting variant");
        self.variants
            .insert(variant.clone(), None);
        self.current = Some(variant);
    }

    /// Record a recipe-wide quantity. These belong before any ingredient or
    /// variant; a late one is still kept but flagged.
    pub fn set_overall_quantity(&mut self, quantity: Quantity) {
        if !self
            .variants
            .is_empty()
        {
            self.errors
                .push(RecipeError::OverallAfterIngredients(quantity.clone()));
        }

        self.overall
            .push(quantity);
    }

    pub fn add_raw_ingredient(
        &mut self,
        depth: usize,
        amount: Amount,
        unit: Unit,
        description: &str,
    ) {
        if depth < 1 || depth > MAX_DEPTH {
            self.errors
                .push(RecipeError::InvalidDepth {
                    depth,
                    description: description.to_string(),
                });
            return;
        }

        let ingredient = Ingredient::new(amount, unit, description);
        self.push_ingredient(depth, ingredient);
    }

    fn push_ingredient(&mut self, depth: usize, ingredient: Ingredient) {
        if self
            .variants
            .is_empty()
        {
            self.insert_variant(Variant::Unnamed);
        }

        let Some(key) = self
            .current
            .as_ref()
        else {
            return;
        };

        let Some(slot) = self
            .variants
            .get_mut(key)
        else {
            return;
        };

        if slot.is_none() {
            if depth == 1 {
                *slot = Some(IngredientList::from_ingredient(1, ingredient));
                return;
            }

            *slot = Some(IngredientList::dummy(1));
        }

        if let Some(list) = slot.as_mut() {
            list.add_ingredient(depth, ingredient);
        }
    }

    /// Record a command for `id`. An action that could not be understood is
    /// passed as `Err` with its original text and ends up in the error log.
    pub fn add_command(&mut self, id: &str, index: usize, action: Result<Action, &str>) {
        let target = identifier(id);

        match action {
            Ok(action) if index > 0 => self
                .commands
                .push(Command {
                    target,
                    index,
                    action,
                }),
            Ok(action) => self
                .errors
                .push(RecipeError::InvalidCommand {
                    target,
                    index,
                    text: describe_action(&action),
                }),
            Err(text) => self
                .errors
                .push(RecipeError::InvalidCommand {
                    target,
                    index,
                    text: text.to_string(),
                }),
        }
    }

    pub fn variants(&self) -> impl Iterator<Item = (&Variant, Option<&IngredientList>)> {
        self.variants
            .iter()
            .map(|(variant, list)| (variant, list.as_ref()))
    }

    pub fn variant(&self, variant: &Variant) -> Option<&IngredientList> {
        self.variants
            .get(variant)
            .and_then(|list| list.as_ref())
    }

    pub fn current(&self) -> Option<&Variant> {
        self.current
            .as_ref()
    }

    pub fn overall(&self) -> &[Quantity] {
        &self.overall
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn errors(&self) -> &[RecipeError] {
        &self.errors
    }

    /// Identifiers by which commands can address this recipe, one per
    /// overall quantity.
    pub fn names(&self) -> Vec<String> {
        self.overall
            .iter()
            .map(|quantity| identifier(quantity.description()))
            .collect()
    }
}

fn describe_action(action: &Action) -> String {
    match action {
        Action::SelectVariant(name) => format!("variant {}", name),
        Action::SetTotal(total) => format!("total {}", total),
    }
}

/// Reduce free text to something usable as an identifier: whitespace
/// becomes `_` and anything other than ASCII letters, digits, and `_` is
/// dropped.
pub fn identifier(text: &str) -> String {
    text.trim()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
