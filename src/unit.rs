use crate::nation::PlayerId;
use crate::geo::Coast;
use crate::ShortName;
use std::borrow::Cow;

/// The type of a military unit. Armies are convoyable land-based units; fleets
/// are sea-going units which are able to convoy armies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitType {
    Army,
    Fleet,
}

impl ShortName for UnitType {
    fn short_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match *self {
            UnitType::Army => "A",
            UnitType::Fleet => "F",
        })
    }
}

/// A unit standing on the board. Diplomacy invests no identity in a unit beyond
/// its owner, type, and current location, so this is freely `Copy`/`Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub owner: PlayerId,
    pub unit_type: UnitType,
    pub coast: Option<Coast>,
}

impl Unit {
    pub fn new(owner: PlayerId, unit_type: UnitType, coast: Option<Coast>) -> Self {
        Unit {
            owner,
            unit_type,
            coast,
        }
    }
}
