use crate::ShortName;
use std::borrow::Cow;
use std::fmt;

/// Stable identity for a province, independent of any borrowed map data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvinceKey(String);

impl ProvinceKey {
    pub fn new(name: impl Into<String>) -> Self {
        ProvinceKey(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for ProvinceKey {
    fn from(value: T) -> Self {
        ProvinceKey::new(value)
    }
}

impl fmt::Display for ProvinceKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ShortName for ProvinceKey {
    fn short_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

/// A named map region. Distinct from `Region`, which additionally carries terrain
/// and coast granularity; a `Province` is the supply-center-bookkeeping unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Province {
    key: ProvinceKey,
    full_name: String,
    supply_center: bool,
}

impl Province {
    pub fn new(key: impl Into<ProvinceKey>, full_name: impl Into<String>, supply_center: bool) -> Self {
        Province {
            key: key.into(),
            full_name: full_name.into(),
            supply_center,
        }
    }

    pub fn key(&self) -> &ProvinceKey {
        &self.key
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_supply_center(&self) -> bool {
        self.supply_center
    }
}

impl ShortName for Province {
    fn short_name(&self) -> Cow<'_, str> {
        self.key.short_name()
    }
}
