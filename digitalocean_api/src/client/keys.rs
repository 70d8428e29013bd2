//! SSH key endpoints. Keys are addressed either by numeric id or by
//! fingerprint; both forms share one endpoint.

use super::Client;
use crate::{
    serializer::{CreateKeyBody, NameBody},
    types::{Key, Keys},
    validation::{check_id, check_not_empty, check_present, validate_page_no},
    ApiAction, ApiRequest, Delete, Error,
};

impl Client {
    /// Without a page the provider returns its first page.
    pub fn get_available_keys(&self, page: Option<u32>) -> Result<Keys, Error> {
        let mut request = ApiRequest::new(ApiAction::AvailableKeys);
        if let Some(page) = page {
            validate_page_no(page)?;
            request = request.with_page(page);
        }
        self.invoke(request)
    }

    pub fn get_key_info(&self, key_id: u64) -> Result<Key, Error> {
        check_id(key_id, "key_id")?;
        self.invoke(ApiRequest::new(ApiAction::GetKeyInfo).with_param(key_id))
    }

    pub fn get_key_info_by_fingerprint(&self, fingerprint: &str) -> Result<Key, Error> {
        check_not_empty(fingerprint, "fingerprint")?;
        self.invoke(ApiRequest::new(ApiAction::GetKeyInfo).with_param(fingerprint))
    }

    pub fn create_key(&self, key: &Key) -> Result<Key, Error> {
        check_present(key.name.as_deref(), "name")?;
        check_present(key.public_key.as_deref(), "public_key")?;
        self.invoke(ApiRequest::new(ApiAction::CreateKey).with_body(&CreateKeyBody::from_key(key))?)
    }

    pub fn update_key(&self, key_id: u64, new_name: &str) -> Result<Key, Error> {
        check_id(key_id, "key_id")?;
        check_not_empty(new_name, "name")?;
        self.rename_key(key_id.to_string(), new_name)
    }

    pub fn update_key_by_fingerprint(&self, fingerprint: &str, new_name: &str) -> Result<Key, Error> {
        check_not_empty(fingerprint, "fingerprint")?;
        check_not_empty(new_name, "name")?;
        self.rename_key(fingerprint.to_string(), new_name)
    }

    pub fn delete_key(&self, key_id: u64) -> Result<Delete, Error> {
        check_id(key_id, "key_id")?;
        self.invoke(ApiRequest::new(ApiAction::DeleteKey).with_param(key_id))
    }

    pub fn delete_key_by_fingerprint(&self, fingerprint: &str) -> Result<Delete, Error> {
        check_not_empty(fingerprint, "fingerprint")?;
        self.invoke(ApiRequest::new(ApiAction::DeleteKey).with_param(fingerprint))
    }

    fn rename_key(&self, key_ref: String, new_name: &str) -> Result<Key, Error> {
        self.invoke(
            ApiRequest::new(ApiAction::UpdateKey)
                .with_param(key_ref)
                .with_body(&NameBody { name: new_name })?,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{client_with, StubTransport};
    use crate::transport::HttpMethod;
    use crate::types::Key;

    const FINGERPRINT: &str = "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa";
    const KEY: &str = r#"{"ssh_key":{"id":512190,"fingerprint":"3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa",
        "public_key":"ssh-rsa AAAAB3Nza example","name":"My SSH Public Key"}}"#;

    #[test]
    fn key_listing_without_page_sends_no_query() {
        let transport = StubTransport::new(200, r#"{"ssh_keys":[]}"#);
        let client = client_with(transport.clone());
        assert!(client.get_available_keys(None).unwrap().ssh_keys.is_empty());
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/account/keys"
        );
    }

    #[test]
    fn create_key_sends_name_and_public_key() {
        let transport = StubTransport::new(201, KEY);
        let created = client_with(transport.clone())
            .create_key(&Key::new("My SSH Public Key", "ssh-rsa AAAAB3Nza example"))
            .unwrap();
        assert_eq!(created.id, Some(512190));
        assert_eq!(created.fingerprint.as_deref(), Some(FINGERPRINT));

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.digitalocean.com/v2/account/keys");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"name": "My SSH Public Key", "public_key": "ssh-rsa AAAAB3Nza example"})
        );
    }

    #[test]
    fn create_key_requires_name_and_public_key() {
        let transport = StubTransport::new(201, KEY);
        let client = client_with(transport.clone());
        assert!(client.create_key(&Key::from_id(1)).is_err());
        assert!(client.create_key(&Key::new("laptop", "")).is_err());
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn id_and_fingerprint_address_the_same_endpoint() {
        let transport = StubTransport::new(200, KEY);
        let client = client_with(transport.clone());

        client.get_key_info(512190).unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/account/keys/512190"
        );

        let by_fingerprint = client.get_key_info_by_fingerprint(FINGERPRINT).unwrap();
        assert_eq!(by_fingerprint.name.as_deref(), Some("My SSH Public Key"));
        assert!(transport
            .last_request()
            .url
            .starts_with("https://api.digitalocean.com/v2/account/keys/3b"));
    }

    #[test]
    fn renames_put_the_new_name() {
        let transport = StubTransport::new(200, KEY);
        let client = client_with(transport.clone());

        client.update_key(512190, "Renamed").unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://api.digitalocean.com/v2/account/keys/512190");
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"Renamed"}"#));

        client.update_key_by_fingerprint(FINGERPRINT, "Renamed").unwrap();
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn deletes_succeed_on_no_content() {
        let transport = StubTransport::new(204, "");
        let client = client_with(transport.clone());
        assert!(client.delete_key(512190).unwrap().is_success());
        assert!(client
            .delete_key_by_fingerprint(FINGERPRINT)
            .unwrap()
            .is_success());
        assert_eq!(transport.last_request().method, HttpMethod::Delete);
    }

    #[test]
    fn missing_arguments_are_rejected_locally() {
        let transport = StubTransport::new(200, KEY);
        let client = client_with(transport.clone());
        assert!(client.get_available_keys(Some(0)).is_err());
        assert!(client.get_key_info(0).is_err());
        assert!(client.get_key_info_by_fingerprint("").is_err());
        assert!(client.update_key(0, "x").is_err());
        assert!(client.update_key(1, "").is_err());
        assert!(client.update_key_by_fingerprint("", "x").is_err());
        assert!(client.delete_key(0).is_err());
        assert!(client.delete_key_by_fingerprint("").is_err());
        assert_eq!(transport.call_count(), 0);
    }
}
