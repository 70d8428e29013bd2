//! Request-body shaping.
//!
//! Resource types serialize every known field so they can be printed or
//! cached. Write endpoints accept only a few of those fields, so each one
//! sends a projection defined here instead of the resource itself.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::types::{Domain, DomainRecord, Droplet, Image, Key};

/// Create-droplet payload.
///
/// `region` and `size` are sent as slugs. `image` is sent as the numeric
/// id when known and as the slug otherwise. `ssh_keys` is flattened to ids
/// (or fingerprints for keys without an id) and omitted when empty, as are
/// unset optional flags.
pub(crate) struct CreateDropletBody<'a>(pub &'a Droplet);

/// An image reference as accepted by the create endpoint.
#[derive(Serialize)]
#[serde(untagged)]
enum ImageRef<'a> {
    Id(u64),
    Slug(&'a str),
}

/// An SSH key reference as accepted by the create endpoint.
#[derive(Serialize)]
#[serde(untagged)]
enum KeyRef<'a> {
    Id(u64),
    Fingerprint(&'a str),
}

impl Serialize for CreateDropletBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let droplet = self.0;
        let mut map = serializer.serialize_map(None)?;

        if let Some(name) = &droplet.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(region) = droplet.region_slug() {
            map.serialize_entry("region", region)?;
        }
        if let Some(size) = droplet.size_slug() {
            map.serialize_entry("size", size)?;
        }
        if let Some(image) = droplet.image.as_ref().and_then(image_ref) {
            map.serialize_entry("image", &image)?;
        }

        let keys: Vec<KeyRef<'_>> = droplet.ssh_keys.iter().filter_map(key_ref).collect();
        if !keys.is_empty() {
            map.serialize_entry("ssh_keys", &keys)?;
        }

        if let Some(backups) = droplet.backups {
            map.serialize_entry("backups", &backups)?;
        }
        if let Some(ipv6) = droplet.ipv6 {
            map.serialize_entry("ipv6", &ipv6)?;
        }
        if let Some(private_networking) = droplet.private_networking {
            map.serialize_entry("private_networking", &private_networking)?;
        }
        if let Some(user_data) = &droplet.user_data {
            map.serialize_entry("user_data", user_data)?;
        }

        map.end()
    }
}

fn image_ref(image: &Image) -> Option<ImageRef<'_>> {
    match (image.id, image.slug.as_deref()) {
        (Some(id), _) => Some(ImageRef::Id(id)),
        (None, Some(slug)) if !slug.is_empty() => Some(ImageRef::Slug(slug)),
        _ => None,
    }
}

fn key_ref(key: &Key) -> Option<KeyRef<'_>> {
    match (key.id, key.fingerprint.as_deref()) {
        (Some(id), _) => Some(KeyRef::Id(id)),
        (None, Some(fingerprint)) if !fingerprint.is_empty() => {
            Some(KeyRef::Fingerprint(fingerprint))
        }
        _ => None,
    }
}

/// Whether the image carries an id or a non-empty slug.
pub(crate) fn has_image_ref(image: Option<&Image>) -> bool {
    image.and_then(image_ref).is_some()
}

/// Body for endpoints that only change a name (image, key, domain record).
#[derive(Serialize)]
pub(crate) struct NameBody<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CreateDomainBody<'a> {
    pub name: &'a str,
    pub ip_address: &'a str,
}

impl<'a> CreateDomainBody<'a> {
    pub fn from_domain(domain: &'a Domain) -> Self {
        Self {
            name: &domain.name,
            ip_address: domain.ip_address.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct CreateKeyBody<'a> {
    pub name: &'a str,
    pub public_key: &'a str,
}

impl<'a> CreateKeyBody<'a> {
    pub fn from_key(key: &'a Key) -> Self {
        Self {
            name: key.name.as_deref().unwrap_or_default(),
            public_key: key.public_key.as_deref().unwrap_or_default(),
        }
    }
}

/// Create-record payload: every record field except the server-assigned id.
#[derive(Serialize)]
pub(crate) struct CreateRecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl<'a> CreateRecordBody<'a> {
    pub fn from_record(record: &'a DomainRecord) -> Self {
        Self {
            record_type: &record.record_type,
            name: record.name.as_deref(),
            data: record.data.as_deref(),
            priority: record.priority,
            port: record.port,
            weight: record.weight,
        }
    }
}
