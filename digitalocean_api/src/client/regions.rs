use super::Client;
use crate::{
    types::{Regions, Sizes},
    validation::validate_page_no,
    ApiAction, ApiRequest, Error,
};

impl Client {
    pub fn get_available_regions(&self, page: u32) -> Result<Regions, Error> {
        validate_page_no(page)?;
        self.invoke(ApiRequest::new(ApiAction::AvailableRegions).with_page(page))
    }

    pub fn get_available_sizes(&self, page: u32) -> Result<Sizes, Error> {
        validate_page_no(page)?;
        self.invoke(ApiRequest::new(ApiAction::AvailableSizes).with_page(page))
    }
}
