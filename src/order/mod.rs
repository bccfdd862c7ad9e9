//! The tagged `Order` sum type and its phase-specific command payloads.
//!
//! Rather than the dynamic-dispatch/generic-location split used elsewhere in this
//! family, orders here key directly off [`crate::geo::ProvinceKey`]: one board,
//! one province-keyed unit of work per decision point, exhaustively matched.

mod build_phase;
mod main_phase;
mod retreat_phase;
mod vassal;

pub use build_phase::BuildOrder;
pub use main_phase::{ConvoyPreference, MainCommand};
pub use retreat_phase::RetreatCommand;
pub use vassal::VassalOrder;

use crate::geo::ProvinceKey;
use crate::unit::UnitType;

/// An order issued to the unit standing at `province`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order<C> {
    pub province: ProvinceKey,
    pub unit_type: UnitType,
    pub command: C,
}

impl<C> Order<C> {
    pub fn new(province: impl Into<ProvinceKey>, unit_type: UnitType, command: C) -> Self {
        Order {
            province: province.into(),
            unit_type,
            command,
        }
    }
}

pub type MainOrder = Order<MainCommand>;
pub type RetreatOrder = Order<RetreatCommand>;
