use crate::geo::{Coast, ProvinceKey};
use crate::ShortName;
use std::fmt;

/// Whether a move order mentions convoy usage. Mirrors the "different rulebooks
/// disagree on the absence of a convoy preference" caveat: absence is not treated
/// as a prohibition here, only as "no preference stated."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvoyPreference {
    None,
    Mandatory,
}

/// A command issued to a unit during the movement phase of a season.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MainCommand {
    /// The unit was explicitly ordered to remain in place.
    Hold,

    /// No order was received for this unit; resolved identically to `Hold`.
    Nmr,

    /// The unit attempts to move to `destination`.
    Move {
        destination: ProvinceKey,
        destination_coast: Option<Coast>,
        via_convoy: ConvoyPreference,
    },

    /// The unit remains in place and supports another unit's hold (when
    /// `destination_province` is `None`) or move (when it names a destination).
    Support {
        source_province: ProvinceKey,
        destination_province: Option<ProvinceKey>,
        destination_coast: Option<Coast>,
    },

    /// A fleet transports the army at `source_province` to `destination_province`.
    ConvoyTransport {
        source_province: ProvinceKey,
        destination_province: ProvinceKey,
    },

    /// The unit cores the supply center it stands on.
    Core,
}

impl MainCommand {
    pub fn move_destination(&self) -> Option<&ProvinceKey> {
        match self {
            MainCommand::Move { destination, .. } => Some(destination),
            _ => None,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, MainCommand::Move { .. })
    }
}

impl fmt::Display for MainCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MainCommand::Hold => write!(f, "holds"),
            MainCommand::Nmr => write!(f, "holds (nmr)"),
            MainCommand::Move { destination, .. } => write!(f, "-> {}", destination.short_name()),
            MainCommand::Support {
                source_province,
                destination_province: Some(dest),
                ..
            } => write!(f, "supports {} -> {}", source_province.short_name(), dest.short_name()),
            MainCommand::Support { source_province, .. } => {
                write!(f, "supports {}", source_province.short_name())
            }
            MainCommand::ConvoyTransport {
                source_province,
                destination_province,
            } => write!(
                f,
                "convoys {} -> {}",
                source_province.short_name(),
                destination_province.short_name()
            ),
            MainCommand::Core => write!(f, "cores"),
        }
    }
}
