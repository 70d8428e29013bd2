use serde::{Deserialize, Serialize};

use super::{Links, Meta};

/// An SSH public key registered with the account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Key {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MD5 fingerprint, usable in place of the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Full public key in OpenSSH format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl Key {
    /// Describes a key to register.
    pub fn new(name: &str, public_key: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            public_key: Some(public_key.to_string()),
            ..Self::default()
        }
    }

    pub fn from_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn from_fingerprint(fingerprint: &str) -> Self {
        Self {
            fingerprint: Some(fingerprint.to_string()),
            ..Self::default()
        }
    }
}

/// Paginated list of keys returned by `/account/keys`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Keys {
    pub ssh_keys: Vec<Key>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
