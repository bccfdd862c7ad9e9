use std::collections::HashMap;

use super::{Border, Province, Region, RegionKey, Terrain};

/// First stage of map construction: register every province by key.
#[derive(Debug, Default)]
pub struct ProvinceRegistry {
    provinces: HashMap<String, Province>,
}

impl ProvinceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, province: Province) -> Self {
        self.provinces.insert(province.key().as_str().to_string(), province);
        self
    }

    pub fn regions(self) -> RegionRegistry {
        RegionRegistry {
            provinces: self.provinces,
            regions: HashMap::new(),
        }
    }
}

/// Second stage: register the regions (coast-qualified spaces) within each province.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    provinces: HashMap<String, Province>,
    regions: HashMap<String, Region>,
}

impl RegionRegistry {
    pub fn add(mut self, region: Region) -> Self {
        self.regions.insert(region.key().to_string(), region);
        self
    }

    pub fn borders(self) -> BorderRegistry {
        BorderRegistry {
            provinces: self.provinces,
            regions: self.regions,
            borders: Vec::new(),
        }
    }
}

/// Final stage: connect regions with borders, then finalize into a `Map`.
#[derive(Debug, Default)]
pub struct BorderRegistry {
    provinces: HashMap<String, Province>,
    regions: HashMap<String, Region>,
    borders: Vec<Border>,
}

impl BorderRegistry {
    pub fn connect(mut self, r1: RegionKey, r2: RegionKey, terrain: Terrain) -> Self {
        self.borders.push(Border::new(r1, r2, terrain));
        self
    }

    pub fn into_parts(self) -> (HashMap<String, Province>, HashMap<String, Region>, Vec<Border>) {
        (self.provinces, self.regions, self.borders)
    }
}

