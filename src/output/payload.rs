//! The payload handed to whatever displays a recipe

use serde::Serialize;

/// Correlation identifier. Fields sharing one scale together; variants
/// sharing one belong to the same recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

/// Hands out correlation identifiers for one build pass. Use a single
/// sequence for every recipe that ends up on the same page.
#[derive(Debug, Default)]
pub struct Sequence {
    next: u32,
}

impl Sequence {
    pub fn new() -> Sequence {
        Sequence::default()
    }

    pub fn issue(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ingredient,
    Overall,
    Total,
}

/// A numeric value the reader can edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub group: GroupId,
    pub role: Role,
    pub baseline: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeOutput {
    pub field: Option<usize>,
    pub unit: String,
    pub description: String,
    pub placeholder: bool,
    pub children: Vec<NodeOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallOutput {
    pub field: usize,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalOutput {
    pub field: usize,
    pub unit: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantOutput {
    pub name: Option<String>,
    pub group: GroupId,
    pub visible: bool,
    pub fields: Vec<Field>,
    pub tree: Vec<NodeOutput>,
    pub overall: Vec<OverallOutput>,
    pub total: TotalOutput,
}

impl VariantOutput {
    pub fn total_field(&self) -> Option<&Field> {
        self.fields
            .get(self.total.field)
    }
}

/// Something to do once the output is live, on the `nth` recipe (from 1)
/// named `target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Trigger {
    SelectVariant {
        target: String,
        nth: usize,
        variant: String,
    },
    SetTotal {
        target: String,
        nth: usize,
        total: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    pub set: GroupId,
    pub names: Vec<String>,
    pub selector: Option<Vec<String>>,
    pub variants: Vec<VariantOutput>,
    pub errors: Vec<String>,
    pub triggers: Vec<Trigger>,
}
