//! Turning a finished recipe into its output payload

use tracing::debug;

use crate::language::*;

use super::payload::*;

impl Recipe {
    /// Produce the payload for this recipe. Identifiers are drawn from
    /// `sequence`, which must be shared by all recipes rendered together so
    /// that their fields don't scale each other.
    pub fn to_output(&self, sequence: &mut Sequence) -> Output {
        let set = sequence.issue();

        let named: Vec<String> = self
            .variants()
            .filter_map(|(variant, _)| variant.name())
            .map(str::to_string)
            .collect();

        let label = match self.overall() {
            [Quantity::Named(description)] => Some(description.clone()),
            _ => None,
        };

        let mut first = true;
        let mut variants = Vec::new();

        for (variant, list) in self.variants() {
            let group = sequence.issue();

            let visible = match variant {
                Variant::Unnamed => true,
                Variant::Named(_) => {
                    let visible = first;
                    first = false;
                    visible
                }
            };

            let mut builder = VariantBuilder {
                group,
                fields: Vec::new(),
            };

            let tree = match list {
                Some(list) => builder.list(list),
                None => Vec::new(),
            };

            let overall = self
                .overall()
                .iter()
                .filter_map(|quantity| {
                    let amount = quantity.amount()?;
                    Some(OverallOutput {
                        field: builder.field(Role::Overall, amount),
                        description: quantity
                            .description()
                            .to_string(),
                    })
                })
                .collect();

            let weight = match list {
                Some(list) => list.compute_total_weight(),
                None => Weight::zero(),
            };

            let total = TotalOutput {
                field: builder.field(
                    Role::Total,
                    weight
                        .amount
                        .value()
                        .unwrap_or(0.0),
                ),
                unit: weight
                    .unit
                    .to_string(),
                label: label.clone(),
            };

            debug!(?group, ?variant, fields = builder.fields.len(), "built variant");

            variants.push(VariantOutput {
                name: variant
                    .name()
                    .map(str::to_string),
                group,
                visible,
                fields: builder.fields,
                tree,
                overall,
                total,
            });
        }

        let triggers = self
            .commands()
            .iter()
            .map(|command| match &command.action {
                Action::SelectVariant(name) => Trigger::SelectVariant {
                    target: command
                        .target
                        .clone(),
                    nth: command.index,
                    variant: name.clone(),
                },
                Action::SetTotal(total) => Trigger::SetTotal {
                    target: command
                        .target
                        .clone(),
                    nth: command.index,
                    total: *total,
                },
            })
            .collect();

        Output {
            set,
            names: self.names(),
            selector: if named.is_empty() { None } else { Some(named) },
            variants,
            errors: self
                .errors()
                .iter()
                .map(|error| error.to_string())
                .collect(),
            triggers,
        }
    }
}

struct VariantBuilder {
    group: GroupId,
    fields: Vec<Field>,
}

impl VariantBuilder {
    fn field(&mut self, role: Role, value: f64) -> usize {
        let value = round1(value);
        self.fields
            .push(Field {
                group: self.group,
                role,
                baseline: value,
                value,
            });
        self.fields
            .len()
            - 1
    }

    fn list(&mut self, list: &IngredientList) -> Vec<NodeOutput> {
        list.items()
            .iter()
            .map(|ingredient| self.node(ingredient))
            .collect()
    }

    fn node(&mut self, ingredient: &Ingredient) -> NodeOutput {
        let field = match ingredient.amount {
            Amount::Given(amount) if amount > 0.0 => Some(self.field(Role::Ingredient, amount)),
            _ => None,
        };

        let children = match ingredient.nested() {
            Some(list) => self.list(list),
            None => Vec::new(),
        };

        NodeOutput {
            field,
            unit: ingredient
                .unit
                .to_string(),
            description: ingredient
                .description
                .clone(),
            placeholder: ingredient.is_placeholder(),
            children,
        }
    }
}
