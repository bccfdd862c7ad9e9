use crate::geo::{ProvinceKey, RegionKey, Terrain};

/// An undirected edge between two regions in the map graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border(RegionKey, RegionKey, Terrain);

impl Border {
    pub fn new(r1: RegionKey, r2: RegionKey, terrain: Terrain) -> Self {
        Border(r1, r2, terrain)
    }

    pub fn terrain(&self) -> Terrain {
        self.2
    }

    pub fn sides(&self) -> (&RegionKey, &RegionKey) {
        (&self.0, &self.1)
    }

    pub fn contains<R: PartialEq<RegionKey>>(&self, r: &R) -> bool {
        *r == self.0 || *r == self.1
    }

    pub fn connects<R: PartialEq<RegionKey>>(&self, r1: &R, r2: &R) -> bool {
        self.contains(r1) && self.contains(r2)
    }

    /// If this border touches `r`, returns the other side.
    pub fn dest_from<R: PartialEq<RegionKey>>(&self, r: &R) -> Option<&RegionKey> {
        if *r == self.0 {
            Some(&self.1)
        } else if *r == self.1 {
            Some(&self.0)
        } else {
            None
        }
    }

    /// True if either side's province matches `p`, used for support/convoy checks that
    /// care only about the destination province and not its coast.
    pub fn touches_province(&self, p: &ProvinceKey) -> bool {
        self.0.province() == p || self.1.province() == p
    }
}
