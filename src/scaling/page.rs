use std::fmt;

use tracing::{debug, warn};

use crate::language::round1;
use crate::output::{Field, GroupId, Output, Role, Trigger};

use super::ScalingError;

/// Position of one field on a page: which recipe, which of its variants,
/// and which of that variant's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub recipe: usize,
    pub variant: usize,
    pub field: usize,
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.recipe, self.variant, self.field)
    }
}

/// Whether an edit also replaces the baselines, making the new values the
/// reference for later edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Yes,
    No,
}

/// Every output of one build pass, as a reader would be looking at them.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    outputs: Vec<Output>,
}

impl Page {
    pub fn new(outputs: Vec<Output>) -> Page {
        Page { outputs }
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn field(&self, at: FieldRef) -> Option<&Field> {
        self.outputs
            .get(at.recipe)?
            .variants
            .get(at.variant)?
            .fields
            .get(at.field)
    }

    /// As [`Page::edit`], for a value still in the form it was typed.
    pub fn edit_text(&mut self, at: FieldRef, text: &str, commit: Commit) -> Result<(), ScalingError> {
        match text
            .trim()
            .parse::<f64>()
        {
            Ok(value) => self.edit(at, value, commit),
            Err(_) => Err(ScalingError::InvalidValue(text.to_string())),
        }
    }

    /// The reader changed the field at `at` to `value`. Every other field in
    /// its group follows in proportion to its own baseline. A changed total
    /// also carries the same proportion over to the other variants of the
    /// recipe.
    pub fn edit(&mut self, at: FieldRef, value: f64, commit: Commit) -> Result<(), ScalingError> {
        let (ratio, role) = self.retarget(at, value, commit)?;

        if role != Role::Total {
            return Ok(());
        }

        let others: Vec<GroupId> = self.outputs[at.recipe]
            .variants
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != at.variant)
            .map(|(_, variant)| variant.group)
            .collect();

        for group in others {
            self.scale(group, ratio, None, commit);
        }

        Ok(())
    }

    /// Set one field and scale its group, without touching anything else.
    fn retarget(
        &mut self,
        at: FieldRef,
        value: f64,
        commit: Commit,
    ) -> Result<(f64, Role), ScalingError> {
        let field = self
            .field(at)
            .ok_or(ScalingError::NoSuchField(at))?;

        if !value.is_finite() || value < 0.0 {
            return Err(ScalingError::InvalidValue(value.to_string()));
        }

        let baseline = field.baseline;
        if baseline == 0.0 || !baseline.is_finite() {
            return Err(ScalingError::ZeroBaseline(at));
        }

        let ratio = value / baseline;
        let group = field.group;
        let role = field.role;

        debug!(%at, ?group, ratio, "scaling");
        self.scale(group, ratio, Some((at, value)), commit);

        Ok((ratio, role))
    }

    fn scale(&mut self, group: GroupId, ratio: f64, source: Option<(FieldRef, f64)>, commit: Commit) {
        for (r, output) in self
            .outputs
            .iter_mut()
            .enumerate()
        {
            for (v, variant) in output
                .variants
                .iter_mut()
                .enumerate()
            {
                for (f, field) in variant
                    .fields
                    .iter_mut()
                    .enumerate()
                {
                    if field.group != group {
                        continue;
                    }

                    let here = FieldRef {
                        recipe: r,
                        variant: v,
                        field: f,
                    };

                    field.value = match source {
                        Some((at, value)) if at == here => value,
                        _ => round1(field.baseline * ratio),
                    };

                    if commit == Commit::Yes {
                        field.baseline = field.value;
                    }
                }
            }
        }
    }

    /// Show variant `name` of the `nth` recipe (from 1) offering a choice
    /// of variants and answering to `target`.
    pub fn select_variant(&mut self, target: &str, nth: usize, name: &str) -> Result<(), ScalingError> {
        let mut found = 0;

        for output in self
            .outputs
            .iter_mut()
        {
            if output
                .selector
                .is_none()
                || !output
                    .names
                    .iter()
                    .any(|n| n == target)
            {
                continue;
            }

            found += 1;
            if found != nth {
                continue;
            }

            let Some(chosen) = output
                .variants
                .iter()
                .position(|variant| variant.name.as_deref() == Some(name))
            else {
                return Err(ScalingError::NoSuchVariant {
                    set: output.set,
                    name: name.to_string(),
                });
            };

            debug!(set = ?output.set, name, "selecting variant");

            for (index, variant) in output
                .variants
                .iter_mut()
                .enumerate()
            {
                if variant
                    .name
                    .is_some()
                {
                    variant.visible = index == chosen;
                }
            }

            return Ok(());
        }

        Err(missing(target, found, nth))
    }

    /// Impose `total` on the `nth` visible total (from 1) among recipes
    /// answering to `target`. Every variant of that recipe gets the same
    /// total, and the new values become the baselines.
    pub fn set_total(&mut self, target: &str, nth: usize, total: f64) -> Result<(), ScalingError> {
        let mut found = 0;
        let mut recipe = None;

        'outer: for (r, output) in self
            .outputs
            .iter()
            .enumerate()
        {
            if !output
                .names
                .iter()
                .any(|n| n == target)
            {
                continue;
            }

            for (v, variant) in output
                .variants
                .iter()
                .enumerate()
            {
                if variant.visible {
                    found += 1;
                    if found == nth {
                        recipe = Some((r, v));
                        break 'outer;
                    }
                }
            }
        }

        let Some((recipe, aimed)) = recipe else {
            return Err(missing(target, found, nth));
        };

        if !total.is_finite() || total < 0.0 {
            return Err(ScalingError::InvalidValue(total.to_string()));
        }

        let mut targets = Vec::new();
        for (v, variant) in self.outputs[recipe]
            .variants
            .iter()
            .enumerate()
        {
            let at = FieldRef {
                recipe,
                variant: v,
                field: variant
                    .total
                    .field,
            };

            let scalable = self
                .field(at)
                .map(|field| field.baseline != 0.0 && field.baseline.is_finite())
                .unwrap_or(false);

            // a variant without a total has nothing to scale; only the one
            // the command was aimed at has to have one
            if scalable {
                targets.push(at);
            } else if v == aimed {
                return Err(ScalingError::ZeroBaseline(at));
            } else {
                debug!(%at, "skipping variant without a total");
            }
        }

        for at in targets {
            self.retarget(at, total, Commit::Yes)?;
        }

        Ok(())
    }

    pub fn execute(&mut self, trigger: &Trigger) -> Result<(), ScalingError> {
        match trigger {
            Trigger::SelectVariant {
                target,
                nth,
                variant,
            } => self.select_variant(target, *nth, variant),
            Trigger::SetTotal { target, nth, total } => self.set_total(target, *nth, *total),
        }
    }

    /// Carry out every recipe's triggers in page order. Failures are logged
    /// and returned; they don't stop the triggers that follow.
    pub fn run_triggers(&mut self) -> Vec<ScalingError> {
        let triggers: Vec<Trigger> = self
            .outputs
            .iter()
            .flat_map(|output| {
                output
                    .triggers
                    .iter()
                    .cloned()
            })
            .collect();

        let mut failures = Vec::new();

        for trigger in &triggers {
            if let Err(error) = self.execute(trigger) {
                warn!("Trigger failed: {}", error);
                failures.push(error);
            }
        }

        failures
    }
}

fn missing(target: &str, found: usize, wanted: usize) -> ScalingError {
    if found == 0 {
        ScalingError::NoSuchGroup(target.to_string())
    } else {
        ScalingError::NotEnough {
            target: target.to_string(),
            found,
            wanted,
        }
    }
}
