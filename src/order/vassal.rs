use crate::nation::PlayerId;

/// An order in the optional vassal/liege political layer, issued during the
/// build phase. Modeled as a flat `Vec<VassalOrder>` per player rather than a
/// map keyed by some other identity, which sidesteps the dict key/value
/// ambiguity this area of the rules is known to have.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VassalOrder {
    /// Offer to become `liege`'s vassal.
    Vassal { liege: PlayerId },
    /// Accept `vassal` as a subordinate.
    Liege { vassal: PlayerId },
    /// Shed `vassal` from this player's vassal set.
    Disown { vassal: PlayerId },
    /// Unilaterally sever this player's own liege relationship.
    Defect,
    /// Propose mutual vassalage with `other`.
    DualMonarchy { other: PlayerId },
    /// Declare independence from an overcommitted or diminished liege.
    RebellionMarker,
}
