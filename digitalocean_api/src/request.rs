//! Request descriptors and the endpoint catalog.

use serde::Serialize;
use serde_json::Value;

use crate::{transport::HttpMethod, Error};

/// Placeholder for a positional path parameter in a catalog template.
const PLACEHOLDER: &str = "{}";

/// One supported API operation.
///
/// Each variant resolves to a path template, an HTTP verb and the element
/// name under which a singular resource is wrapped in the response body.
/// Element names ending in `s` denote collections, which are decoded from
/// the top-level body without unwrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    AvailableDroplets,
    AvailableDropletKernels,
    GetDropletSnapshots,
    GetDropletBackups,
    GetDropletInfo,
    CreateDroplet,
    DeleteDroplet,
    RebootDroplet,
    PowerCycleDroplet,
    ShutdownDroplet,
    PowerOffDroplet,
    PowerOnDroplet,
    ResetDropletPassword,
    ResizeDroplet,
    SnapshotDroplet,
    RestoreDroplet,
    RebuildDroplet,
    DisableDropletBackups,
    RenameDroplet,
    ChangeDropletKernel,
    EnableDropletIpv6,
    EnableDropletPrivateNetworking,
    AvailableActions,
    GetActionInfo,
    GetDropletActions,
    GetImageActions,
    AvailableImages,
    GetImageInfo,
    UpdateImageInfo,
    DeleteImage,
    TransferImage,
    AvailableRegions,
    AvailableSizes,
    AvailableDomains,
    GetDomainInfo,
    CreateDomain,
    DeleteDomain,
    GetDomainRecords,
    GetDomainRecordInfo,
    CreateDomainRecord,
    UpdateDomainRecord,
    DeleteDomainRecord,
    AvailableKeys,
    GetKeyInfo,
    CreateKey,
    UpdateKey,
    DeleteKey,
}

impl ApiAction {
    /// Every catalog entry, in declaration order.
    pub const ALL: [ApiAction; 47] = [
        ApiAction::AvailableDroplets,
        ApiAction::AvailableDropletKernels,
        ApiAction::GetDropletSnapshots,
        ApiAction::GetDropletBackups,
        ApiAction::GetDropletInfo,
        ApiAction::CreateDroplet,
        ApiAction::DeleteDroplet,
        ApiAction::RebootDroplet,
        ApiAction::PowerCycleDroplet,
        ApiAction::ShutdownDroplet,
        ApiAction::PowerOffDroplet,
        ApiAction::PowerOnDroplet,
        ApiAction::ResetDropletPassword,
        ApiAction::ResizeDroplet,
        ApiAction::SnapshotDroplet,
        ApiAction::RestoreDroplet,
        ApiAction::RebuildDroplet,
        ApiAction::DisableDropletBackups,
        ApiAction::RenameDroplet,
        ApiAction::ChangeDropletKernel,
        ApiAction::EnableDropletIpv6,
        ApiAction::EnableDropletPrivateNetworking,
        ApiAction::AvailableActions,
        ApiAction::GetActionInfo,
        ApiAction::GetDropletActions,
        ApiAction::GetImageActions,
        ApiAction::AvailableImages,
        ApiAction::GetImageInfo,
        ApiAction::UpdateImageInfo,
        ApiAction::DeleteImage,
        ApiAction::TransferImage,
        ApiAction::AvailableRegions,
        ApiAction::AvailableSizes,
        ApiAction::AvailableDomains,
        ApiAction::GetDomainInfo,
        ApiAction::CreateDomain,
        ApiAction::DeleteDomain,
        ApiAction::GetDomainRecords,
        ApiAction::GetDomainRecordInfo,
        ApiAction::CreateDomainRecord,
        ApiAction::UpdateDomainRecord,
        ApiAction::DeleteDomainRecord,
        ApiAction::AvailableKeys,
        ApiAction::GetKeyInfo,
        ApiAction::CreateKey,
        ApiAction::UpdateKey,
        ApiAction::DeleteKey,
    ];

    /// Catalog lookup: `(path template, verb, element name)`.
    fn endpoint(&self) -> (&'static str, HttpMethod, &'static str) {
        use HttpMethod::*;
        match self {
            ApiAction::AvailableDroplets => ("/droplets", Get, "droplets"),
            ApiAction::AvailableDropletKernels => ("/droplets/{}/kernels", Get, "kernels"),
            ApiAction::GetDropletSnapshots => ("/droplets/{}/snapshots", Get, "snapshots"),
            ApiAction::GetDropletBackups => ("/droplets/{}/backups", Get, "backups"),
            ApiAction::GetDropletInfo => ("/droplets/{}", Get, "droplet"),
            ApiAction::CreateDroplet => ("/droplets", Post, "droplet"),
            ApiAction::DeleteDroplet => ("/droplets/{}", Delete, "response"),
            ApiAction::RebootDroplet
            | ApiAction::PowerCycleDroplet
            | ApiAction::ShutdownDroplet
            | ApiAction::PowerOffDroplet
            | ApiAction::PowerOnDroplet
            | ApiAction::ResetDropletPassword
            | ApiAction::ResizeDroplet
            | ApiAction::SnapshotDroplet
            | ApiAction::RestoreDroplet
            | ApiAction::RebuildDroplet
            | ApiAction::DisableDropletBackups
            | ApiAction::RenameDroplet
            | ApiAction::ChangeDropletKernel
            | ApiAction::EnableDropletIpv6
            | ApiAction::EnableDropletPrivateNetworking => ("/droplets/{}/actions", Post, "action"),
            ApiAction::AvailableActions => ("/actions", Get, "actions"),
            ApiAction::GetActionInfo => ("/actions/{}", Get, "action"),
            ApiAction::GetDropletActions => ("/droplets/{}/actions", Get, "actions"),
            ApiAction::GetImageActions => ("/images/{}/actions", Get, "actions"),
            ApiAction::AvailableImages => ("/images", Get, "images"),
            ApiAction::GetImageInfo => ("/images/{}", Get, "image"),
            ApiAction::UpdateImageInfo => ("/images/{}", Put, "image"),
            ApiAction::DeleteImage => ("/images/{}", Delete, "response"),
            ApiAction::TransferImage => ("/images/{}/actions", Post, "action"),
            ApiAction::AvailableRegions => ("/regions", Get, "regions"),
            ApiAction::AvailableSizes => ("/sizes", Get, "sizes"),
            ApiAction::AvailableDomains => ("/domains", Get, "domains"),
            ApiAction::GetDomainInfo => ("/domains/{}", Get, "domain"),
            ApiAction::CreateDomain => ("/domains", Post, "domain"),
            ApiAction::DeleteDomain => ("/domains/{}", Delete, "response"),
            ApiAction::GetDomainRecords => ("/domains/{}/records", Get, "domain_records"),
            ApiAction::GetDomainRecordInfo => ("/domains/{}/records/{}", Get, "domain_record"),
            ApiAction::CreateDomainRecord => ("/domains/{}/records", Post, "domain_record"),
            ApiAction::UpdateDomainRecord => ("/domains/{}/records/{}", Put, "domain_record"),
            ApiAction::DeleteDomainRecord => ("/domains/{}/records/{}", Delete, "response"),
            ApiAction::AvailableKeys => ("/account/keys", Get, "ssh_keys"),
            ApiAction::GetKeyInfo => ("/account/keys/{}", Get, "ssh_key"),
            ApiAction::CreateKey => ("/account/keys", Post, "ssh_key"),
            ApiAction::UpdateKey => ("/account/keys/{}", Put, "ssh_key"),
            ApiAction::DeleteKey => ("/account/keys/{}", Delete, "response"),
        }
    }

    /// Path template relative to the versioned API root, with `{}` placeholders.
    pub fn path(&self) -> &'static str {
        self.endpoint().0
    }

    pub fn method(&self) -> HttpMethod {
        self.endpoint().1
    }

    /// JSON property wrapping the payload of a singular-resource response.
    pub fn element_name(&self) -> &'static str {
        self.endpoint().2
    }

    /// Whether the response is a collection decoded from the top-level body.
    pub fn is_collection(&self) -> bool {
        self.element_name().ends_with('s')
    }

    /// Number of positional path parameters the template expects.
    pub fn param_count(&self) -> usize {
        self.path().matches(PLACEHOLDER).count()
    }
}

/// An abstract API call: catalog entry, path parameters, optional page
/// number and optional JSON body.
///
/// Built with the consuming `with_*` methods and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    action: ApiAction,
    params: Vec<String>,
    page: Option<u32>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(action: ApiAction) -> Self {
        Self {
            action,
            params: Vec::new(),
            page: None,
            body: None,
        }
    }

    /// Appends the next positional path parameter.
    pub fn with_param(mut self, param: impl ToString) -> Self {
        self.params.push(param.to_string());
        self
    }

    /// Sets the 1-based page number, sent as the `page` query parameter.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Serializes `body` to JSON and attaches it as the request payload.
    pub fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(body).map_err(|e| {
            tracing::error!("Failed to serialize request body for {:?}: {}", self.action, e);
            Error::invalid_argument(format!("request body could not be serialized: {}", e))
        })?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn action(&self) -> ApiAction {
        self.action
    }

    pub fn method(&self) -> HttpMethod {
        self.action.method()
    }

    pub fn element_name(&self) -> &'static str {
        self.action.element_name()
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Builds `/{api_version}{template}` with path parameters substituted in order.
    ///
    /// Parameters are percent-encoded as single path segments. The page
    /// number never appears in the path.
    pub fn path(&self, api_version: &str) -> Result<String, Error> {
        let template = self.action.path();
        let expected = self.action.param_count();
        if self.params.len() != expected {
            return Err(Error::invalid_argument(format!(
                "{:?} expects {} path parameter(s), got {}",
                self.action,
                expected,
                self.params.len()
            )));
        }

        let mut path = format!("/{}", api_version);
        let mut params = self.params.iter();
        let mut pieces = template.split(PLACEHOLDER).peekable();
        while let Some(piece) = pieces.next() {
            path.push_str(piece);
            if pieces.peek().is_some() {
                // Count was checked above, so a parameter is always available here.
                if let Some(param) = params.next() {
                    path.push_str(&encode_segment(param));
                }
            }
        }
        Ok(path)
    }
}

/// Percent-encodes characters that would break out of a single path segment.
fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
