use crate::geo::{Coast, ProvinceKey};
use crate::unit::UnitType;
use std::fmt;

/// A command issued during the build/disband turn. Unlike movement and retreat
/// orders, these are not attached to an existing unit — a `Build` creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildOrder {
    Build {
        province: ProvinceKey,
        unit_type: UnitType,
        coast: Option<Coast>,
    },
    Disband {
        province: ProvinceKey,
    },
}

impl fmt::Display for BuildOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildOrder::Build { province, unit_type, .. } => {
                write!(f, "build {:?} {}", unit_type, province)
            }
            BuildOrder::Disband { province } => write!(f, "disband {}", province),
        }
    }
}
