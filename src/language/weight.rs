//! Computing the total amount of an ingredient or a list of them

use super::types::{Amount, Ingredient, IngredientList, Unit};

/// An amount together with the unit it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Weight {
    pub amount: Amount,
    pub unit: Unit,
}

impl Weight {
    pub fn zero() -> Weight {
        Weight {
            amount: Amount::Given(0.0),
            unit: Unit::Unspecified,
        }
    }
}

impl Ingredient {
    /// An amount written on the ingredient itself always wins over the sum
    /// of whatever is nested below it; cooking loses water, and the author
    /// knows the real figure. Without one, fall back to the nested total,
    /// and failing that hand back the amount as written (zero or absent) for
    /// the caller to judge.
    pub fn compute_total_weight(&self) -> Weight {
        if self
            .amount
            .is_positive()
        {
            return Weight {
                amount: self.amount,
                unit: self
                    .unit
                    .clone(),
            };
        }

        if let Some(list) = self.nested() {
            let weight = list.compute_total_weight();
            if weight
                .amount
                .is_positive()
            {
                return weight;
            }
        }

        Weight {
            amount: self.amount,
            unit: self
                .unit
                .clone(),
        }
    }
}

impl IngredientList {
    /// Sum every contributing ingredient. Ingredients with no amount are
    /// skipped; a single explicit zero (or negative) contributor makes the
    /// whole total meaningless and yields zero. The unit is the first one
    /// seen, or `Unit::Mixed` once two different units have contributed.
    pub fn compute_total_weight(&self) -> Weight {
        let mut total = 0.0;
        let mut unit = Unit::Unspecified;

        for ingredient in self.items() {
            let weight = ingredient.compute_total_weight();

            let amount = match weight.amount {
                Amount::Absent => continue,
                Amount::Given(amount) => amount,
            };

            if amount <= 0.0 {
                return Weight::zero();
            }

            total += amount;

            if !unit.is_specified() {
                unit = weight
                    .unit
                    .clone();
            }

            if weight
                .unit
                .is_specified()
                && weight.unit != unit
            {
                unit = Unit::Mixed;
            }
        }

        Weight {
            amount: Amount::Given(total),
            unit,
        }
    }
}
