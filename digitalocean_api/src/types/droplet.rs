//! Droplet-related types: virtual machines, their kernels and networks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Image, Key, Links, Meta, Region, Size};

/// A droplet (virtual machine).
///
/// The same type is used to describe a droplet to create: set `name`,
/// `region`, `size` (or `size_slug`) and `image`, plus any of the optional
/// create-only fields at the bottom.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Droplet {
    /// Unique numeric droplet identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Human-readable droplet name, also used as its hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Memory in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<u32>,

    /// Disk size in gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,

    /// Region the droplet runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    /// Base image the droplet was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Kernel currently selected for the droplet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<Kernel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Slug of the droplet's size (e.g. `512mb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_slug: Option<String>,

    /// Whether the droplet is locked against actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DropletStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Networks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub backup_ids: Vec<u64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub snapshot_ids: Vec<u64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub action_ids: Vec<u64>,

    /// Enabled features such as `backups`, `ipv6` or `private_networking`.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub features: Vec<String>,

    /// SSH keys to install on creation, referenced by id or fingerprint.
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ssh_keys: Vec<Key>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_networking: Option<bool>,

    /// Cloud-init user data passed on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

impl Droplet {
    /// Describes a droplet to create from the four required attributes.
    pub fn new(name: &str, region_slug: &str, size_slug: &str, image: Image) -> Self {
        Self {
            name: Some(name.to_string()),
            region: Some(Region::from_slug(region_slug)),
            size_slug: Some(size_slug.to_string()),
            image: Some(image),
            ..Self::default()
        }
    }

    /// Size slug, read from `size_slug` or from the nested size object.
    pub fn size_slug(&self) -> Option<&str> {
        self.size_slug
            .as_deref()
            .or_else(|| self.size.as_ref().map(|s| s.slug.as_str()))
            .filter(|slug| !slug.is_empty())
    }

    pub fn region_slug(&self) -> Option<&str> {
        self.region
            .as_ref()
            .map(|r| r.slug.as_str())
            .filter(|slug| !slug.is_empty())
    }

    /// First public IPv4 address, if the droplet has one yet.
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks.as_ref().and_then(|n| {
            n.v4.iter()
                .find(|net| net.network_type == "public")
                .map(|net| net.ip_address.as_str())
        })
    }
}

/// Droplet lifecycle status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DropletStatus {
    /// Being provisioned.
    New,
    Active,
    /// Powered off.
    Off,
    Archive,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}
impl std::fmt::Display for DropletStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DropletStatus::New => "new",
                DropletStatus::Active => "active",
                DropletStatus::Off => "off",
                DropletStatus::Archive => "archive",
                DropletStatus::Unknown => "unknown",
            }
        )
    }
}

/// A kernel that can be selected for a droplet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Kernel {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,
}

/// Network interfaces of a droplet, grouped by IP version.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Networks {
    #[serde(deserialize_with = "super::null_as_default")]
    pub v4: Vec<Network>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub v6: Vec<Network>,
}

/// One network interface.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Network {
    pub ip_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask: Option<Netmask>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// `public` or `private`.
    #[serde(rename = "type", default, deserialize_with = "super::null_as_default")]
    pub network_type: String,
}

/// IPv4 netmasks are dotted strings, IPv6 netmasks are prefix lengths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Netmask {
    Dotted(String),
    Prefix(u32),
}

/// Paginated list of droplets returned by `/droplets`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Droplets {
    pub droplets: Vec<Droplet>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Kernels available to a droplet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Kernels {
    pub kernels: Vec<Kernel>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Snapshot images taken of a droplet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Snapshots {
    pub snapshots: Vec<Image>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Backup images taken of a droplet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Backups {
    pub backups: Vec<Image>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
