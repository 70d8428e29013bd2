use super::Client;
use crate::{
    serializer::NameBody,
    types::{Action, Image, ImageAction, Images},
    validation::{check_id, check_not_empty, check_present, validate_page_no},
    ApiAction, ApiRequest, Delete, Error,
};

impl Client {
    /// Lists public distribution images and the account's own snapshots
    /// and backups.
    pub fn get_available_images(&self, page: u32) -> Result<Images, Error> {
        validate_page_no(page)?;
        self.invoke(ApiRequest::new(ApiAction::AvailableImages).with_page(page))
    }

    pub fn get_image_info(&self, image_id: u64) -> Result<Image, Error> {
        check_id(image_id, "image_id")?;
        self.invoke(ApiRequest::new(ApiAction::GetImageInfo).with_param(image_id))
    }

    /// Looks up a public image by slug, e.g. `ubuntu-14-04-x64`.
    pub fn get_image_info_by_slug(&self, slug: &str) -> Result<Image, Error> {
        check_not_empty(slug, "image_slug")?;
        self.invoke(ApiRequest::new(ApiAction::GetImageInfo).with_param(slug))
    }

    /// Renames an image. Only `id` and `name` of `image` are used.
    pub fn update_image(&self, image: &Image) -> Result<Image, Error> {
        let image_id = image.id.unwrap_or_default();
        check_id(image_id, "image_id")?;
        check_present(image.name.as_deref(), "name")?;

        let body = NameBody {
            name: image.name.as_deref().unwrap_or_default(),
        };
        self.invoke(
            ApiRequest::new(ApiAction::UpdateImageInfo)
                .with_param(image_id)
                .with_body(&body)?,
        )
    }

    pub fn delete_image(&self, image_id: u64) -> Result<Delete, Error> {
        check_id(image_id, "image_id")?;
        self.invoke(ApiRequest::new(ApiAction::DeleteImage).with_param(image_id))
    }

    /// Copies an image to another region.
    pub fn transfer_image(&self, image_id: u64, region_slug: &str) -> Result<Action, Error> {
        check_id(image_id, "image_id")?;
        check_not_empty(region_slug, "region_slug")?;
        self.invoke(
            ApiRequest::new(ApiAction::TransferImage)
                .with_param(image_id)
                .with_body(&ImageAction::transfer(region_slug))?,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{client_with, StubTransport};
    use crate::transport::HttpMethod;
    use crate::types::Image;
    use crate::Error;

    const IMAGE: &str = r#"{"image":{"id":7555620,"name":"new-image-name",
        "distribution":"Ubuntu","slug":null,"public":false,"regions":["nyc2","nyc3"],
        "created_at":"2014-11-14T16:44:03Z","min_disk_size":20}}"#;

    #[test]
    fn update_image_puts_only_the_name() {
        let transport = StubTransport::new(200, IMAGE);
        let mut image = Image::from_id(7555620);
        image.name = Some("new-image-name".to_string());
        image.distribution = Some("Ubuntu".to_string());

        let updated = client_with(transport.clone()).update_image(&image).unwrap();
        assert_eq!(updated.name.as_deref(), Some("new-image-name"));
        assert_eq!(updated.regions, vec!["nyc2", "nyc3"]);
        assert!(updated.slug.is_none());

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://api.digitalocean.com/v2/images/7555620");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "new-image-name"}));
    }

    #[test]
    fn update_image_requires_id_and_name() {
        let transport = StubTransport::new(200, IMAGE);
        let client = client_with(transport.clone());

        let mut no_id = Image::default();
        no_id.name = Some("x".to_string());
        assert!(matches!(client.update_image(&no_id), Err(Error::InvalidArgument(_))));

        let no_name = Image::from_id(1);
        assert!(matches!(client.update_image(&no_name), Err(Error::InvalidArgument(_))));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn slug_lookup_shares_the_info_endpoint() {
        let transport = StubTransport::new(200, IMAGE);
        client_with(transport.clone())
            .get_image_info_by_slug("ubuntu-14-04-x64")
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.digitalocean.com/v2/images/ubuntu-14-04-x64"
        );
    }

    #[test]
    fn transfer_posts_region_to_image_actions() {
        let transport = StubTransport::new(
            201,
            r#"{"action":{"id":36805527,"status":"in-progress","type":"transfer",
                "resource_id":7938269,"resource_type":"image","region_slug":"nyc2"}}"#,
        );
        let action = client_with(transport.clone())
            .transfer_image(7938269, "nyc2")
            .unwrap();
        assert_eq!(action.resource_id, Some(7938269));

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "https://api.digitalocean.com/v2/images/7938269/actions"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"type": "transfer", "region": "nyc2"}));
    }

    #[test]
    fn delete_image_succeeds_on_no_content() {
        let transport = StubTransport::new(204, "");
        let deleted = client_with(transport).delete_image(7938391).unwrap();
        assert!(deleted.is_success());
    }

    #[test]
    fn invalid_arguments_are_rejected_locally() {
        let transport = StubTransport::new(200, IMAGE);
        let client = client_with(transport.clone());
        assert!(client.get_available_images(0).is_err());
        assert!(client.get_image_info(0).is_err());
        assert!(client.get_image_info_by_slug("").is_err());
        assert!(client.delete_image(0).is_err());
        assert!(client.transfer_image(0, "nyc2").is_err());
        assert!(client.transfer_image(1, "").is_err());
        assert_eq!(transport.call_count(), 0);
    }
}
