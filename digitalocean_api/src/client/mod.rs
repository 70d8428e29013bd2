//! Blocking HTTP client for the DigitalOcean v2 API.

mod actions;
mod domains;
mod droplets;
mod images;
mod keys;
mod regions;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, DEFAULT_TIMEOUT},
    user_agent::get_user_agent,
    validation, ApiRequest, ApiResponse, Error,
};

/// Scheme and host of the production API.
pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com";

/// The only API version this client speaks.
pub const API_VERSION: &str = "v2";

const JSON_CONTENT_TYPE: &str = "application/json";
const PARAM_PAGE_NO: &str = "page";

/// HTTP client for the DigitalOcean v2 API.
///
/// A client is immutable once built: the auth token, API version and base
/// URL are fixed at construction, and switching tokens produces a new
/// client via [`Client::with_auth_token`]. Clones share the underlying
/// transport and its connection pool, so a client can be used from several
/// threads at once.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    auth_token: String,
    api_version: String,
    /// Base URL for the API. Defaults to `https://api.digitalocean.com`.
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Configures and builds a [`Client`].
pub struct ClientBuilder {
    auth_token: String,
    api_version: String,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// API version to target. Only `v2` (case-insensitive) is accepted.
    pub fn api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    /// Scheme and host (optionally a path prefix) the versioned paths are
    /// appended to. Used for testing with wiremock.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Request timeout of the default transport. Ignored when a custom
    /// transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the default reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        validation::check_not_empty(&self.auth_token, "auth_token")?;
        if !self.api_version.eq_ignore_ascii_case(API_VERSION) {
            tracing::error!("Unsupported API version: {}", self.api_version);
            return Err(Error::invalid_argument("Only API version 2 is supported."));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::invalid_argument(format!("invalid base URL '{}': {}", base_url, e))
        })?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeout(self.timeout)?),
        };

        Ok(Client {
            transport,
            auth_token: self.auth_token,
            api_version: API_VERSION.to_string(),
            base_url,
        })
    }
}

impl Client {
    /// Creates a client for the production API with the default transport.
    pub fn new(auth_token: &str) -> Result<Self, Error> {
        Self::builder(auth_token).build()
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, auth_token: &str) -> Result<Self, Error> {
        Self::builder(auth_token).base_url(base_url).build()
    }

    pub fn builder(auth_token: &str) -> ClientBuilder {
        ClientBuilder {
            auth_token: auth_token.to_string(),
            api_version: API_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Returns a client identical to this one but authenticating with
    /// `auth_token`. The transport is shared.
    pub fn with_auth_token(&self, auth_token: &str) -> Result<Self, Error> {
        validation::check_not_empty(auth_token, "auth_token")?;
        Ok(Self {
            auth_token: auth_token.to_string(),
            ..self.clone()
        })
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes a request descriptor and returns the decoded envelope.
    pub fn perform<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<ApiResponse<T>, Error> {
        let url = self.create_url(request)?;
        let method = request.method();
        let body = match request.body() {
            Some(body) if method.has_body() => Some(serde_json::to_string(body).map_err(|e| {
                tracing::error!("Failed to serialize request body: {}", e);
                Error::invalid_argument(format!("request body could not be serialized: {}", e))
            })?),
            _ => None,
        };

        let http_request = HttpRequest {
            method,
            url: url.to_string(),
            headers: self.request_headers(),
            body,
        };
        tracing::debug!("{} {}", http_request.method, http_request.url);

        let response = self.execute(&http_request)?;
        ApiResponse::decode(request.action(), &response)
    }

    fn invoke<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        self.perform::<T>(&request)?.into_data()
    }

    fn create_url(&self, request: &ApiRequest) -> Result<Url, Error> {
        let path = request.path(&self.api_version)?;
        let mut url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::invalid_argument(format!("invalid request URL: {}", e))
        })?;
        if let Some(page) = request.page() {
            url.query_pairs_mut()
                .append_pair(PARAM_PAGE_NO, &page.to_string());
        }
        Ok(url)
    }

    fn request_headers(&self) -> Vec<(String, String)> {
        vec![
            ("User-Agent".to_string(), get_user_agent().to_string()),
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.auth_token),
            ),
        ]
    }

    /// Runs the request and returns the body text to decode.
    fn execute(&self, request: &HttpRequest) -> Result<String, Error> {
        let response = self.transport.execute(request)?;
        tracing::debug!(
            "HTTP {} from {} {}",
            response.status,
            request.method,
            request.url
        );
        match response.status {
            200..=202 => Ok(response.body),
            _ => evaluate_response(response),
        }
    }
}

/// Provider error envelope returned with 4xx/5xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    id: String,
    message: String,
}

/// Interprets a response outside 200-202.
///
/// 204 is a bodiless success and becomes the literal `true`. 400-509 must
/// carry an [`ErrorBody`]. Anything else is a failed request.
fn evaluate_response(response: HttpResponse) -> Result<String, Error> {
    let status = response.status;
    if status == 204 {
        return Ok("true".to_string());
    }

    if (400..510).contains(&status) {
        let error = serde_json::from_str::<ErrorBody>(&response.body).map_err(|e| {
            let snippet = truncate_body(&response.body);
            tracing::error!("Unreadable error body with status {}: {} | body: {}", status, e, snippet);
            Error::RequestFailed(format!("HTTP {} with unreadable error body: {}", status, snippet))
        })?;
        tracing::error!(
            "Request failed with status {}: {} ({})",
            status,
            error.message,
            error.id
        );
        return Err(Error::Api {
            status,
            id: error.id,
            message: error.message,
        });
    }

    tracing::error!("Unexpected HTTP status {}", status);
    Err(Error::RequestFailed(format!("unexpected HTTP status {}", status)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{transport::HttpMethod, ApiAction, Payload};

    /// Records every request and answers with a canned response.
    pub(crate) struct StubTransport {
        status: u16,
        body: String,
        pub(crate) requests: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        pub(crate) fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("transport was never called")
        }

        pub(crate) fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Transport for StubTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, Error> {
            Err(Error::RequestFailed("connection refused".to_string()))
        }
    }

    pub(crate) fn client_with(transport: Arc<StubTransport>) -> Client {
        Client::builder("test-token")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_rejects_other_api_versions() {
        let err = Client::builder("t").api_version("v1").build().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let transport = StubTransport::new(200, "{}");
        let client = Client::builder("t")
            .api_version("V2")
            .transport(transport)
            .build()
            .unwrap();
        assert_eq!(client.api_version(), "v2");
    }

    #[test]
    fn builder_rejects_empty_token_and_bad_base_url() {
        assert!(matches!(Client::new(""), Err(Error::InvalidArgument(_))));
        let err = Client::builder("t")
            .base_url("not a url")
            .transport(StubTransport::new(200, "{}"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn with_auth_token_returns_a_new_client() {
        let transport = StubTransport::new(204, "");
        let first = client_with(transport.clone());
        let second = first.with_auth_token("other-token").unwrap();
        assert_eq!(first.auth_token(), "test-token");
        assert_eq!(second.auth_token(), "other-token");

        second.delete_droplet(1).unwrap();
        assert_eq!(
            transport.last_request().header("authorization"),
            Some("Bearer other-token")
        );
    }

    #[test]
    fn debug_output_hides_the_token() {
        let client = client_with(StubTransport::new(200, "{}"));
        assert!(!format!("{:?}", client).contains("test-token"));
    }

    #[test]
    fn sends_fixed_headers() {
        let transport = StubTransport::new(200, r#"{"regions":[]}"#);
        client_with(transport.clone()).get_available_regions(1).unwrap();
        let req = transport.last_request();
        assert_eq!(req.header("authorization"), Some("Bearer test-token"));
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert!(req
            .header("user-agent")
            .unwrap()
            .starts_with("digitalocean-api-rust/"));
    }

    #[test]
    fn url_has_version_prefix_params_and_page() {
        let transport = StubTransport::new(200, r#"{"actions":[]}"#);
        client_with(transport.clone())
            .get_available_droplet_actions(3164494, 2)
            .unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "https://api.digitalocean.com/v2/droplets/3164494/actions?page=2"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn page_is_omitted_when_absent() {
        let transport = StubTransport::new(200, r#"{"domain_records":[]}"#);
        client_with(transport.clone())
            .get_domain_records("example.com")
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/domains/example.com/records"
        );
    }

    #[test]
    fn base_url_override_keeps_the_path_layout() {
        let transport = StubTransport::new(200, r#"{"sizes":[]}"#);
        let client = Client::builder("t")
            .base_url("http://127.0.0.1:8080/")
            .transport(transport.clone())
            .build()
            .unwrap();
        client.get_available_sizes(1).unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://127.0.0.1:8080/v2/sizes?page=1"
        );
    }

    #[test]
    fn status_204_decodes_to_true() {
        let transport = StubTransport::new(204, "");
        let client = client_with(transport.clone());
        let resp = client
            .perform::<bool>(&ApiRequest::new(ApiAction::DeleteImage).with_param(7))
            .unwrap();
        assert_eq!(resp.payload(), &Payload::Boolean(true));
        assert_eq!(resp.action(), ApiAction::DeleteImage);
        assert_eq!(transport.last_request().method, HttpMethod::Delete);
    }

    #[test]
    fn provider_error_carries_status_id_and_message() {
        for status in [400, 404, 422, 500, 509] {
            let transport = StubTransport::new(status, r#"{"id":"E1","message":"bad request"}"#);
            let err = client_with(transport).get_droplet_info(1).unwrap_err();
            match err {
                Error::Api {
                    status: got,
                    id,
                    message,
                } => {
                    assert_eq!(got, status);
                    assert_eq!(id, "E1");
                    assert_eq!(message, "bad request");
                }
                other => panic!("expected provider error, got {:?}", other),
            }
        }
    }

    #[test]
    fn undecodable_error_body_is_a_request_failure() {
        let transport = StubTransport::new(502, "<html>Bad Gateway</html>");
        let err = client_with(transport).get_droplet_info(1).unwrap_err();
        assert!(matches!(err, Error::RequestFailed(_)));
    }

    #[test]
    fn statuses_outside_known_ranges_are_request_failures() {
        for status in [301, 304, 510, 599] {
            let transport = StubTransport::new(status, "");
            let err = client_with(transport).get_droplet_info(1).unwrap_err();
            assert!(matches!(err, Error::RequestFailed(_)), "status {}", status);
        }
    }

    #[test]
    fn transport_failures_surface_as_request_failures() {
        let client = Client::builder("t")
            .transport(Arc::new(FailingTransport))
            .build()
            .unwrap();
        let err = client.get_available_droplets(1).unwrap_err();
        match err {
            Error::RequestFailed(msg) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn accepted_and_created_bodies_are_decoded() {
        for status in [201, 202] {
            let transport = StubTransport::new(
                status,
                r#"{"action":{"id":36804636,"status":"in-progress","type":"reboot"}}"#,
            );
            let action = client_with(transport).reboot_droplet(3164450).unwrap();
            assert_eq!(action.id, 36804636);
        }
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncate_body("short") == "short");
    }
}
