//! Blocking client for the DigitalOcean v2 REST API.
//!
//! Every public method on [`Client`] validates its arguments, builds an
//! [`ApiRequest`] from the endpoint catalog in [`ApiAction`], performs one
//! HTTP call through a [`transport::Transport`] and decodes the JSON body
//! into a typed value from [`types`].

mod client;
mod errors;
mod request;
mod response;
mod serializer;
pub mod transport;
pub mod types;
mod user_agent;
mod validation;
pub use self::client::{Client, ClientBuilder, API_VERSION, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::request::{ApiAction, ApiRequest};
pub use self::response::{ApiResponse, Delete, Payload};
pub use self::transport::HttpMethod;
