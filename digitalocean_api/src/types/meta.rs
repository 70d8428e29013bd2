//! Pagination blocks shared by every collection response.

use serde::{Deserialize, Serialize};
use url::Url;

/// `meta` block of a collection response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Meta {
    /// Total number of items across all pages.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total: u64,
}

/// `links` block of a collection response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

/// Absolute URLs of neighbouring pages. Absent entries mean there is no
/// such page relative to the current one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl Pages {
    /// Page number of the next page, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        self.next.as_deref().and_then(page_param)
    }

    /// Page number of the last page, if the provider reported one.
    pub fn last_page(&self) -> Option<u32> {
        self.last.as_deref().and_then(page_param)
    }
}

impl Links {
    pub fn next_page(&self) -> Option<u32> {
        self.pages.as_ref().and_then(Pages::next_page)
    }

    pub fn last_page(&self) -> Option<u32> {
        self.pages.as_ref().and_then(Pages::last_page)
    }
}

fn page_param(link: &str) -> Option<u32> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
}
