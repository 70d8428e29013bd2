//! Response envelope and body decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiAction, Error};

/// Decoded payload of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// The body was the literal `true` or `false` (including the `true`
    /// synthesized for HTTP 204).
    Boolean(bool),
    /// The body decoded into the declared result type.
    Data(T),
}

/// Result of one API call, before the caller extracts the payload.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    action: ApiAction,
    success: bool,
    payload: Payload<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a raw body according to the catalog entry of `action`.
    ///
    /// A body of exactly `true` or `false` becomes a boolean payload whatever
    /// `T` is. Collection actions decode the whole body; singular actions
    /// decode the property named after the action's element.
    pub fn decode(action: ApiAction, body: &str) -> Result<Self, Error> {
        let payload = match body {
            "true" => Payload::Boolean(true),
            "false" => Payload::Boolean(false),
            _ if action.is_collection() => {
                let data = serde_json::from_str::<T>(body).map_err(|e| {
                    tracing::error!("Failed to parse {:?} response: {}", action, e);
                    Error::Decode(e.to_string())
                })?;
                Payload::Data(data)
            }
            _ => {
                let element = action.element_name();
                let mut parsed = serde_json::from_str::<Value>(body).map_err(|e| {
                    tracing::error!("Failed to parse {:?} response: {}", action, e);
                    Error::Decode(e.to_string())
                })?;
                let inner = parsed
                    .as_object_mut()
                    .and_then(|obj| obj.remove(element))
                    .ok_or_else(|| {
                        tracing::error!("{:?} response has no `{}` property", action, element);
                        Error::Decode(format!("response is missing the `{}` property", element))
                    })?;
                let data = serde_json::from_value::<T>(inner).map_err(|e| {
                    tracing::error!("Failed to parse `{}` in {:?} response: {}", element, action, e);
                    Error::Decode(e.to_string())
                })?;
                Payload::Data(data)
            }
        };

        Ok(Self {
            action,
            success: true,
            payload,
        })
    }

    /// Consumes the envelope and returns the payload as `T`.
    ///
    /// A boolean payload converts only into types that deserialize from a
    /// JSON boolean, such as `bool` or [`Delete`].
    pub fn into_data(self) -> Result<T, Error> {
        match self.payload {
            Payload::Data(data) => Ok(data),
            Payload::Boolean(flag) => serde_json::from_value::<T>(Value::Bool(flag)).map_err(|e| {
                tracing::error!("{:?} returned `{}` instead of a resource", self.action, flag);
                Error::Decode(e.to_string())
            }),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn action(&self) -> ApiAction {
        self.action
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payload(&self) -> &Payload<T> {
        &self.payload
    }
}

/// Outcome of a delete call. The provider answers deletes with HTTP 204 and
/// no body, which decodes to a successful `Delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub struct Delete {
    request_success: bool,
}

impl Delete {
    pub fn new(request_success: bool) -> Self {
        Self { request_success }
    }

    pub fn is_success(&self) -> bool {
        self.request_success
    }
}

impl From<bool> for Delete {
    fn from(request_success: bool) -> Self {
        Self { request_success }
    }
}

impl From<Delete> for bool {
    fn from(delete: Delete) -> Self {
        delete.request_success
    }
}
