use crate::geo::ProvinceKey;
use crate::ShortName;
use std::borrow::Cow;
use std::fmt;

/// Differentiates regions within a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coast {
    North,
    East,
    South,
    West,
}

impl ShortName for Coast {
    fn short_name(&self) -> Cow<'_, str> {
        use self::Coast::*;
        Cow::Borrowed(match *self {
            North => "(nc)",
            East => "(ec)",
            South => "(sc)",
            West => "(wc)",
        })
    }
}

/// The type of environment a region occupies. Armies cannot operate at sea; fleets
/// cannot operate on pure land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Land,
    Coast,
    Sea,
}

/// A fully described space within a province: its parent province, optional coast,
/// and terrain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    province: ProvinceKey,
    coast: Option<Coast>,
    terrain: Terrain,
}

impl Region {
    pub fn new(province: impl Into<ProvinceKey>, coast: impl Into<Option<Coast>>, terrain: Terrain) -> Self {
        Region {
            province: province.into(),
            coast: coast.into(),
            terrain,
        }
    }

    pub fn province(&self) -> &ProvinceKey {
        &self.province
    }

    pub fn coast(&self) -> Option<Coast> {
        self.coast
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn key(&self) -> RegionKey {
        RegionKey::new(self.province.clone(), self.coast)
    }
}

impl ShortName for Region {
    fn short_name(&self) -> Cow<'_, str> {
        if let Some(coast) = self.coast() {
            Cow::Owned(format!("{}{}", self.province().short_name(), coast.short_name()))
        } else {
            self.province().short_name()
        }
    }
}

/// A lightweight, owned reference to a `Region` used throughout orders and the
/// resolver so that values can be copied freely instead of borrowed across the
/// resolver's recursive calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionKey(ProvinceKey, Option<Coast>);

impl RegionKey {
    pub fn new(province: impl Into<ProvinceKey>, coast: impl Into<Option<Coast>>) -> Self {
        RegionKey(province.into(), coast.into())
    }

    pub fn province(&self) -> &ProvinceKey {
        &self.0
    }

    pub fn coast(&self) -> Option<Coast> {
        self.1
    }
}

impl From<&Region> for RegionKey {
    fn from(r: &Region) -> Self {
        r.key()
    }
}

impl PartialEq<ProvinceKey> for RegionKey {
    fn eq(&self, rhs: &ProvinceKey) -> bool {
        &self.0 == rhs
    }
}

impl ShortName for RegionKey {
    fn short_name(&self) -> Cow<'_, str> {
        if let Some(coast) = self.coast() {
            Cow::Owned(format!("{}{}", self.province().short_name(), coast.short_name()))
        } else {
            self.province().short_name()
        }
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
