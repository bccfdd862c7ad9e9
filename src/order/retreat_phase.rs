use crate::geo::{Coast, ProvinceKey};
use crate::ShortName;
use std::fmt;

/// A command issued to a dislodged unit during the retreat phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetreatCommand {
    Move {
        destination: ProvinceKey,
        destination_coast: Option<Coast>,
    },
    Disband,
}

impl RetreatCommand {
    pub fn destination(&self) -> Option<&ProvinceKey> {
        match self {
            RetreatCommand::Move { destination, .. } => Some(destination),
            RetreatCommand::Disband => None,
        }
    }
}

impl fmt::Display for RetreatCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RetreatCommand::Move { destination, .. } => write!(f, "-> {}", destination.short_name()),
            RetreatCommand::Disband => write!(f, "disbands"),
        }
    }
}
