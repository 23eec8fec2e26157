//! Proportional scaling across a page of rendered recipes

mod page;

pub use page::*;

use std::fmt;

use crate::output::GroupId;

#[derive(Debug, Clone, PartialEq)]
pub enum ScalingError {
    NoSuchField(FieldRef),
    InvalidValue(String),
    ZeroBaseline(FieldRef),
    NoSuchGroup(String),
    NotEnough {
        target: String,
        found: usize,
        wanted: usize,
    },
    NoSuchVariant {
        set: GroupId,
        name: String,
    },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NoSuchField(field) => write!(f, "no field at {}", field),
            ScalingError::InvalidValue(text) => write!(f, "\"{}\" is not a number", text),
            ScalingError::ZeroBaseline(field) => {
                write!(f, "field at {} has nothing to scale from", field)
            }
            ScalingError::NoSuchGroup(target) => write!(f, "no recipe named \"{}\"", target),
            ScalingError::NotEnough {
                target,
                found,
                wanted,
            } => write!(
                f,
                "wanted recipe #{} named \"{}\" but only {} found",
                wanted, target, found
            ),
            ScalingError::NoSuchVariant { set, name } => {
                write!(f, "no variant \"{}\" in recipe {}", name, set.0)
            }
        }
    }
}
