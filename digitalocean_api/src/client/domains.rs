//! Domain and DNS record endpoints.

use super::Client;
use crate::{
    serializer::{CreateDomainBody, CreateRecordBody, NameBody},
    types::{Domain, DomainRecord, DomainRecords, Domains},
    validation::{check_id, check_not_empty, check_present, validate_page_no},
    ApiAction, ApiRequest, Delete, Error,
};

impl Client {
    /// Without a page the provider returns its first page.
    pub fn get_available_domains(&self, page: Option<u32>) -> Result<Domains, Error> {
        let mut request = ApiRequest::new(ApiAction::AvailableDomains);
        if let Some(page) = page {
            validate_page_no(page)?;
            request = request.with_page(page);
        }
        self.invoke(request)
    }

    pub fn get_domain_info(&self, domain_name: &str) -> Result<Domain, Error> {
        check_not_empty(domain_name, "domain_name")?;
        self.invoke(ApiRequest::new(ApiAction::GetDomainInfo).with_param(domain_name))
    }

    /// Creates a domain with an A record for `ip_address` at the apex.
    pub fn create_domain(&self, domain: &Domain) -> Result<Domain, Error> {
        check_not_empty(&domain.name, "name")?;
        check_present(domain.ip_address.as_deref(), "ip_address")?;
        self.invoke(
            ApiRequest::new(ApiAction::CreateDomain)
                .with_body(&CreateDomainBody::from_domain(domain))?,
        )
    }

    pub fn delete_domain(&self, domain_name: &str) -> Result<Delete, Error> {
        check_not_empty(domain_name, "domain_name")?;
        self.invoke(ApiRequest::new(ApiAction::DeleteDomain).with_param(domain_name))
    }

    /// Lists every record of a domain. The endpoint is not paginated.
    pub fn get_domain_records(&self, domain_name: &str) -> Result<DomainRecords, Error> {
        check_not_empty(domain_name, "domain_name")?;
        self.invoke(ApiRequest::new(ApiAction::GetDomainRecords).with_param(domain_name))
    }

    pub fn get_domain_record_info(
        &self,
        domain_name: &str,
        record_id: u64,
    ) -> Result<DomainRecord, Error> {
        check_not_empty(domain_name, "domain_name")?;
        check_id(record_id, "record_id")?;
        self.invoke(
            ApiRequest::new(ApiAction::GetDomainRecordInfo)
                .with_param(domain_name)
                .with_param(record_id),
        )
    }

    /// Adds a record to a domain. Only the record type is checked here;
    /// which other fields are required depends on the type and is enforced
    /// by the provider.
    pub fn create_domain_record(
        &self,
        domain_name: &str,
        record: &DomainRecord,
    ) -> Result<DomainRecord, Error> {
        check_not_empty(domain_name, "domain_name")?;
        check_not_empty(&record.record_type, "type")?;
        self.invoke(
            ApiRequest::new(ApiAction::CreateDomainRecord)
                .with_param(domain_name)
                .with_body(&CreateRecordBody::from_record(record))?,
        )
    }

    pub fn update_domain_record(
        &self,
        domain_name: &str,
        record_id: u64,
        new_name: &str,
    ) -> Result<DomainRecord, Error> {
        check_not_empty(domain_name, "domain_name")?;
        check_id(record_id, "record_id")?;
        check_not_empty(new_name, "name")?;
        self.invoke(
            ApiRequest::new(ApiAction::UpdateDomainRecord)
                .with_param(domain_name)
                .with_param(record_id)
                .with_body(&NameBody { name: new_name })?,
        )
    }

    pub fn delete_domain_record(&self, domain_name: &str, record_id: u64) -> Result<Delete, Error> {
        check_not_empty(domain_name, "domain_name")?;
        check_id(record_id, "record_id")?;
        self.invoke(
            ApiRequest::new(ApiAction::DeleteDomainRecord)
                .with_param(domain_name)
                .with_param(record_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{client_with, StubTransport};
    use crate::transport::HttpMethod;
    use crate::types::{Domain, DomainRecord};

    fn sent_body(transport: &StubTransport) -> serde_json::Value {
        serde_json::from_str(transport.last_request().body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn domain_listing_page_is_optional() {
        let transport = StubTransport::new(200, r#"{"domains":[]}"#);
        let client = client_with(transport.clone());
        client.get_available_domains(None).unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/domains"
        );
        client.get_available_domains(Some(2)).unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/domains?page=2"
        );
    }

    #[test]
    fn create_domain_sends_name_and_ip() {
        let transport = StubTransport::new(
            201,
            r#"{"domain":{"name":"example.com","ttl":null,"zone_file":null}}"#,
        );
        let created = client_with(transport.clone())
            .create_domain(&Domain::new("example.com", "1.2.3.4"))
            .unwrap();
        assert_eq!(created.name, "example.com");
        assert!(created.ttl.is_none());
        assert_eq!(
            sent_body(&transport),
            json!({"name": "example.com", "ip_address": "1.2.3.4"})
        );
    }

    #[test]
    fn create_domain_requires_ip_address() {
        let transport = StubTransport::new(201, "{}");
        let domain = Domain {
            name: "example.com".to_string(),
            ..Domain::default()
        };
        assert!(client_with(transport.clone()).create_domain(&domain).is_err());
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn record_info_addresses_domain_and_record() {
        let transport = StubTransport::new(
            200,
            r#"{"domain_record":{"id":3352896,"type":"A","name":"www","data":"162.10.66.0",
                "priority":null,"port":null,"weight":null}}"#,
        );
        let record = client_with(transport.clone())
            .get_domain_record_info("example.com", 3352896)
            .unwrap();
        assert_eq!(record.record_type, "A");
        assert_eq!(record.data.as_deref(), Some("162.10.66.0"));
        assert!(record.priority.is_none());
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/domains/example.com/records/3352896"
        );
    }

    #[test]
    fn create_record_posts_to_the_domain() {
        let transport = StubTransport::new(
            201,
            r#"{"domain_record":{"id":3352899,"type":"CNAME","name":"blog","data":"@"}}"#,
        );
        let created = client_with(transport.clone())
            .create_domain_record("example.com", &DomainRecord::new("CNAME", "blog", "@"))
            .unwrap();
        assert_eq!(created.id, Some(3352899));

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "https://api.digitalocean.com/v2/domains/example.com/records"
        );
        assert_eq!(
            sent_body(&transport),
            json!({"type": "CNAME", "name": "blog", "data": "@"})
        );
    }

    #[test]
    fn update_record_puts_the_new_name() {
        let transport = StubTransport::new(
            200,
            r#"{"domain_record":{"id":3352896,"type":"A","name":"blog","data":"162.10.66.0"}}"#,
        );
        let updated = client_with(transport.clone())
            .update_domain_record("example.com", 3352896, "blog")
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("blog"));
        assert_eq!(transport.last_request().method, HttpMethod::Put);
        assert_eq!(sent_body(&transport), json!({"name": "blog"}));
    }

    #[test]
    fn deletes_succeed_on_no_content() {
        let transport = StubTransport::new(204, "");
        let client = client_with(transport.clone());
        assert!(client.delete_domain("example.com").unwrap().is_success());
        assert!(client
            .delete_domain_record("example.com", 3352896)
            .unwrap()
            .is_success());
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/domains/example.com/records/3352896"
        );
    }

    #[test]
    fn missing_arguments_are_rejected_locally() {
        let transport = StubTransport::new(200, "{}");
        let client = client_with(transport.clone());
        assert!(client.get_available_domains(Some(0)).is_err());
        assert!(client.get_domain_info("").is_err());
        assert!(client.delete_domain("").is_err());
        assert!(client.get_domain_records("").is_err());
        assert!(client.get_domain_record_info("example.com", 0).is_err());
        assert!(client
            .create_domain_record("example.com", &DomainRecord::default())
            .is_err());
        assert!(client.update_domain_record("example.com", 1, "").is_err());
        assert!(client.delete_domain_record("", 1).is_err());
        assert_eq!(transport.call_count(), 0);
    }
}
