use serde::{Deserialize, Serialize};

use super::{Links, Meta};

/// A datacenter region.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Region {
    /// Short region identifier (e.g. `nyc3`).
    #[serde(deserialize_with = "super::null_as_default")]
    pub slug: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,

    /// Slugs of the sizes that can be created in this region.
    #[serde(deserialize_with = "super::null_as_default")]
    pub sizes: Vec<String>,

    /// Whether new droplets can be created here.
    #[serde(deserialize_with = "super::null_as_default")]
    pub available: bool,

    #[serde(deserialize_with = "super::null_as_default")]
    pub features: Vec<String>,
}

impl Region {
    pub fn from_slug(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            ..Self::default()
        }
    }
}

/// Paginated list of regions returned by `/regions`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Regions {
    pub regions: Vec<Region>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
