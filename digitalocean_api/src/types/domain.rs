//! Domains and their DNS records.

use serde::{Deserialize, Serialize};

use super::{Links, Meta};

/// A DNS zone managed by the provider.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Domain {
    /// Domain name, e.g. `example.com`.
    pub name: String,

    /// Default TTL of the zone's records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Complete zone file as served by the provider's name servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_file: Option<String>,

    /// IP address for the apex A record. Only sent on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl Domain {
    pub fn new(name: &str, ip_address: &str) -> Self {
        Self {
            name: name.to_string(),
            ip_address: Some(ip_address.to_string()),
            ..Self::default()
        }
    }
}

/// One DNS record within a domain.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DomainRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Record type: `A`, `AAAA`, `CNAME`, `MX`, `TXT`, `SRV` or `NS`.
    #[serde(rename = "type", default)]
    pub record_type: String,

    /// Host name relative to the domain, `@` for the apex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Record value: an address, a host name or free text depending on type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Priority for `MX` and `SRV` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// Port for `SRV` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,

    /// Weight for `SRV` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl DomainRecord {
    pub fn new(record_type: &str, name: &str, data: &str) -> Self {
        Self {
            record_type: record_type.to_string(),
            name: Some(name.to_string()),
            data: Some(data.to_string()),
            ..Self::default()
        }
    }
}

/// Paginated list of domains returned by `/domains`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Domains {
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Records of one domain returned by `/domains/{name}/records`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DomainRecords {
    pub domain_records: Vec<DomainRecord>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
