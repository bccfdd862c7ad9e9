//! Turn/phase/season bookkeeping, used by [`crate::dispatch`] to select an
//! adjudicator and by the build/retreat rules to decide FALL-only behavior.

use crate::ShortName;
use std::borrow::Cow;
use std::fmt;

/// The step within a season's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Movement,
    Retreat,
    Build,
}

impl ShortName for Phase {
    fn short_name(&self) -> Cow<'_, str> {
        match self {
            Phase::Movement => Cow::Borrowed("M"),
            Phase::Retreat => Cow::Borrowed("R"),
            Phase::Build => Cow::Borrowed("B"),
        }
    }
}

/// The season in the year. Builds occur in `Winter`; ownership transitions that
/// are normally reserved for `Fall` are gated on this value throughout `judge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    Spring,
    Fall,
    Winter,
}

impl ShortName for Season {
    fn short_name(&self) -> Cow<'_, str> {
        match self {
            Season::Spring => Cow::Borrowed("S"),
            Season::Fall => Cow::Borrowed("F"),
            Season::Winter => Cow::Borrowed("W"),
        }
    }
}

/// A specific point in game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    year: u16,
    season: Season,
    phase: Phase,
}

impl Turn {
    pub fn new(season: Season, year: u16, phase: Phase) -> Self {
        Turn { year, season, phase }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_fall(&self) -> bool {
        self.season == Season::Fall
    }

    /// Per the phase contract: exactly one of these three is true for any turn
    /// the core will accept; anything else is a caller error.
    pub fn is_moves(&self) -> bool {
        self.phase == Phase::Movement
    }

    pub fn is_retreats(&self) -> bool {
        self.phase == Phase::Retreat
    }

    pub fn is_builds(&self) -> bool {
        self.phase == Phase::Build
    }
}

impl ShortName for Turn {
    fn short_name(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{}{}{}",
            self.season.short_name(),
            self.year,
            self.phase.short_name()
        ))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
