//! Argument checks run before any request is built.
//!
//! Identifiers are positive integers, so zero stands in for "missing".
//! Page numbers are 1-based, so zero is likewise rejected.

use crate::Error;

fn missing(name: &str) -> Error {
    let msg = format!("Missing required parameter - {}.", name);
    tracing::error!("{}", msg);
    Error::InvalidArgument(msg)
}

pub(crate) fn check_id(id: u64, name: &str) -> Result<(), Error> {
    if id == 0 {
        return Err(missing(name));
    }
    Ok(())
}

pub(crate) fn check_not_empty(value: &str, name: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(())
}

/// Like [`check_not_empty`] for optional fields of a resource.
pub(crate) fn check_present(value: Option<&str>, name: &str) -> Result<(), Error> {
    check_not_empty(value.unwrap_or_default(), name)
}

pub(crate) fn validate_page_no(page: u32) -> Result<(), Error> {
    if page == 0 {
        return Err(missing("page"));
    }
    Ok(())
}

pub(crate) fn validate_droplet_id(droplet_id: u64) -> Result<(), Error> {
    check_id(droplet_id, "droplet_id")
}

pub(crate) fn validate_droplet_id_and_page_no(droplet_id: u64, page: u32) -> Result<(), Error> {
    validate_droplet_id(droplet_id)?;
    validate_page_no(page)
}
