//! Asynchronous actions and the request bodies that trigger them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Links, Meta};

/// Record of an asynchronous operation (reboot, resize, transfer, ...).
///
/// Actions are returned as soon as the provider accepts a request; poll
/// `get_action_info` until `status` leaves [`ActionStatus::InProgress`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Action {
    /// Unique numeric action identifier.
    pub id: u64,

    pub status: ActionStatus,

    /// Provider action name, e.g. `reboot` or `transfer`.
    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// Unset while the action is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Id of the droplet or image the action operates on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u64>,

    /// `droplet` or `image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_slug: Option<String>,
}

/// Progress of an action.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    #[serde(rename = "in-progress")]
    InProgress,

    #[serde(rename = "completed")]
    Completed,

    #[serde(rename = "errored")]
    Errored,

    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}
impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ActionStatus::InProgress => "in-progress",
                ActionStatus::Completed => "completed",
                ActionStatus::Errored => "errored",
                ActionStatus::Unknown => "unknown",
            }
        )
    }
}

/// Action names accepted by the droplet and image action endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Reboot,
    PowerCycle,
    Shutdown,
    PowerOff,
    PowerOn,
    PasswordReset,
    Resize,
    Snapshot,
    Restore,
    Rebuild,
    DisableBackups,
    Rename,
    ChangeKernel,
    EnableIpv6,
    EnablePrivateNetworking,
    Transfer,
}

/// Body of a `POST /droplets/{id}/actions` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DropletAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,

    /// New droplet name (`rename`) or snapshot name (`snapshot`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Target size slug for `resize`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Image id for `restore` and `rebuild`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<u64>,

    /// Kernel id for `change_kernel`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<u64>,
}

impl DropletAction {
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            name: None,
            size: None,
            image: None,
            kernel: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn with_image(mut self, image_id: u64) -> Self {
        self.image = Some(image_id);
        self
    }

    pub fn with_kernel(mut self, kernel_id: u64) -> Self {
        self.kernel = Some(kernel_id);
        self
    }
}

/// Body of a `POST /images/{id}/actions` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,

    /// Destination region slug for `transfer`.
    pub region: String,
}

impl ImageAction {
    pub fn transfer(region_slug: &str) -> Self {
        Self {
            action_type: ActionType::Transfer,
            region: region_slug.to_string(),
        }
    }
}

/// Paginated list of actions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Actions {
    pub actions: Vec<Action>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
