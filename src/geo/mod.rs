//! Map geometry: provinces, regions, borders, and the graph they form.
//!
//! Construction goes through [`builder::ProvinceRegistry`] -> `RegionRegistry` ->
//! `BorderRegistry` -> [`Map`]. There is no file or config loader here; a small
//! hardcoded [`fixture::build`] map is provided for tests.

pub mod builder;
mod border;
mod map;
mod province;
mod region;
pub mod fixture;

pub use border::Border;
pub use map::Map;
pub use province::{Province, ProvinceKey};
pub use region::{Coast, Region, RegionKey, Terrain};
