use super::Client;
use crate::{
    types::{Action, Actions},
    validation::{check_id, validate_droplet_id_and_page_no, validate_page_no},
    ApiAction, ApiRequest, Error,
};

impl Client {
    /// Lists every action performed on the account, newest first.
    pub fn get_available_actions(&self, page: u32) -> Result<Actions, Error> {
        validate_page_no(page)?;
        self.invoke(ApiRequest::new(ApiAction::AvailableActions).with_page(page))
    }

    /// Fetches one action, typically to poll its status.
    pub fn get_action_info(&self, action_id: u64) -> Result<Action, Error> {
        check_id(action_id, "action_id")?;
        self.invoke(ApiRequest::new(ApiAction::GetActionInfo).with_param(action_id))
    }

    pub fn get_available_droplet_actions(
        &self,
        droplet_id: u64,
        page: u32,
    ) -> Result<Actions, Error> {
        validate_droplet_id_and_page_no(droplet_id, page)?;
        self.invoke(
            ApiRequest::new(ApiAction::GetDropletActions)
                .with_param(droplet_id)
                .with_page(page),
        )
    }

    pub fn get_available_image_actions(&self, image_id: u64, page: u32) -> Result<Actions, Error> {
        check_id(image_id, "image_id")?;
        validate_page_no(page)?;
        self.invoke(
            ApiRequest::new(ApiAction::GetImageActions)
                .with_param(image_id)
                .with_page(page),
        )
    }
}
