use std::collections::HashMap;

use petgraph::graphmap::UnGraphMap;

use super::builder::BorderRegistry;
use super::{Border, Province, ProvinceKey, Region, RegionKey, Terrain};

/// A collection of provinces, their constituent regions, and the interconnecting borders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    provinces: HashMap<String, Province>,
    regions: HashMap<String, Region>,
    borders: Vec<Border>,
}

impl Map {
    pub fn provinces(&self) -> impl Iterator<Item = &Province> {
        self.provinces.values()
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn find_province(&self, key: &ProvinceKey) -> Option<&Province> {
        self.provinces.get(key.as_str())
    }

    pub fn find_region(&self, key: &RegionKey) -> Option<&Region> {
        self.regions
            .values()
            .find(|r| &r.key() == key)
    }

    /// Regions belonging to a province, one per coast plus the coastless region if any.
    pub fn regions_of<'a>(&'a self, province: &'a ProvinceKey) -> impl Iterator<Item = &'a Region> {
        self.regions.values().filter(move |r| r.province() == province)
    }

    pub fn borders_containing<'a>(&'a self, r: &RegionKey) -> Vec<&'a Border> {
        self.borders.iter().filter(|b| b.contains(r)).collect()
    }

    /// Every region bordering `region`, regardless of coast.
    pub fn find_bordering(&self, region: &RegionKey) -> Vec<&RegionKey> {
        self.borders_containing(region)
            .into_iter()
            .filter_map(|b| b.dest_from(region))
            .collect()
    }

    /// Every province adjacent to `p`, ignoring coast granularity. Used by convoy
    /// path search, which only cares about province-level sea chains.
    pub fn bordering_provinces<'a>(&'a self, p: &ProvinceKey) -> Vec<&'a ProvinceKey> {
        self.borders
            .iter()
            .filter_map(|b| {
                let (a, b2) = b.sides();
                if a.province() == p {
                    Some(b2.province())
                } else if b2.province() == p {
                    Some(a.province())
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn find_border_between(&self, r1: &RegionKey, r2: &RegionKey) -> Option<&Border> {
        self.borders.iter().find(|b| b.connects(r1, r2))
    }

    /// Any border connecting `r1` to some region belonging to province `p2`; used
    /// for support and convoy checks which only care about the destination province.
    pub fn find_borders_to_province<'a>(&'a self, r1: &RegionKey, p2: &ProvinceKey) -> Vec<&'a Border> {
        self.borders
            .iter()
            .filter(|b| b.contains(r1) && b.touches_province(p2))
            .collect()
    }

    pub fn to_graph(&self) -> UnGraphMap<&Region, Terrain> {
        let mut graph = UnGraphMap::new();
        let node_index = self
            .regions()
            .map(|r| (r.key(), graph.add_node(r)))
            .collect::<HashMap<_, _>>();

        for border in &self.borders {
            let (a, b) = border.sides();
            graph.add_edge(
                *node_index.get(a).expect("region should be registered"),
                *node_index.get(b).expect("region should be registered"),
                border.terrain(),
            );
        }

        graph
    }
}

impl From<BorderRegistry> for Map {
    fn from(other: BorderRegistry) -> Self {
        let (provinces, regions, borders) = other.into_parts();
        Self {
            provinces,
            regions,
            borders,
        }
    }
}
