//! Distribution images, snapshots and backups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Links, Meta};

/// An image: a public distribution, an application image, or a private
/// snapshot/backup of a droplet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Image {
    /// Unique numeric image identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Distribution name (e.g. `Ubuntu`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,

    /// Slug of a public image (e.g. `ubuntu-14-04-x64`). Private images have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub public: bool,

    /// Slugs of the regions the image is available in.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub regions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// `snapshot` or `backup` for private images.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,

    /// Minimum disk size in gigabytes required to use the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_disk_size: Option<u64>,
}

impl Image {
    /// Refers to an image by numeric id.
    pub fn from_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Refers to a public image by slug.
    pub fn from_slug(slug: &str) -> Self {
        Self {
            slug: Some(slug.to_string()),
            ..Self::default()
        }
    }
}

/// Paginated list of images returned by `/images`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Images {
    pub images: Vec<Image>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
