use serde::{Deserialize, Serialize};

use super::{Links, Meta};

/// A droplet size (memory, CPU, disk and price tier).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Size {
    /// Size identifier (e.g. `512mb`).
    #[serde(deserialize_with = "super::null_as_default")]
    pub slug: String,

    /// Memory in megabytes.
    #[serde(deserialize_with = "super::null_as_default")]
    pub memory: u64,

    #[serde(deserialize_with = "super::null_as_default")]
    pub vcpus: u32,

    /// Disk size in gigabytes.
    #[serde(deserialize_with = "super::null_as_default")]
    pub disk: u64,

    /// Included outbound transfer in terabytes.
    #[serde(deserialize_with = "super::null_as_default")]
    pub transfer: f64,

    #[serde(deserialize_with = "super::null_as_default")]
    pub price_monthly: f64,

    #[serde(deserialize_with = "super::null_as_default")]
    pub price_hourly: f64,

    /// Slugs of the regions offering this size.
    #[serde(deserialize_with = "super::null_as_default")]
    pub regions: Vec<String>,

    #[serde(deserialize_with = "super::null_as_default")]
    pub available: bool,
}

impl Size {
    pub fn from_slug(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            ..Self::default()
        }
    }
}

/// Paginated list of sizes returned by `/sizes`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Sizes {
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
