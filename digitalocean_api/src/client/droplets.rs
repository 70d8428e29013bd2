//! Droplet endpoints and droplet actions.

use super::Client;
use crate::{
    serializer::{has_image_ref, CreateDropletBody},
    types::{
        Action, ActionType, Backups, Droplet, DropletAction, Droplets, Kernels, Snapshots,
    },
    validation::{
        check_id, check_not_empty, check_present, validate_droplet_id,
        validate_droplet_id_and_page_no, validate_page_no,
    },
    ApiAction, ApiRequest, Delete, Error,
};

impl Client {
    /// Lists the droplets on the account.
    pub fn get_available_droplets(&self, page: u32) -> Result<Droplets, Error> {
        validate_page_no(page)?;
        self.invoke(ApiRequest::new(ApiAction::AvailableDroplets).with_page(page))
    }

    /// Lists the kernels a droplet can switch to.
    pub fn get_available_kernels(&self, droplet_id: u64, page: u32) -> Result<Kernels, Error> {
        validate_droplet_id_and_page_no(droplet_id, page)?;
        self.invoke(
            ApiRequest::new(ApiAction::AvailableDropletKernels)
                .with_param(droplet_id)
                .with_page(page),
        )
    }

    pub fn get_available_snapshots(&self, droplet_id: u64, page: u32) -> Result<Snapshots, Error> {
        validate_droplet_id_and_page_no(droplet_id, page)?;
        self.invoke(
            ApiRequest::new(ApiAction::GetDropletSnapshots)
                .with_param(droplet_id)
                .with_page(page),
        )
    }

    pub fn get_available_backups(&self, droplet_id: u64, page: u32) -> Result<Backups, Error> {
        validate_droplet_id_and_page_no(droplet_id, page)?;
        self.invoke(
            ApiRequest::new(ApiAction::GetDropletBackups)
                .with_param(droplet_id)
                .with_page(page),
        )
    }

    pub fn get_droplet_info(&self, droplet_id: u64) -> Result<Droplet, Error> {
        validate_droplet_id(droplet_id)?;
        self.invoke(ApiRequest::new(ApiAction::GetDropletInfo).with_param(droplet_id))
    }

    /// Creates a droplet. `name`, a region slug, a size slug and an image id
    /// or slug are required.
    pub fn create_droplet(&self, droplet: &Droplet) -> Result<Droplet, Error> {
        check_present(droplet.name.as_deref(), "name")?;
        check_present(droplet.region_slug(), "region")?;
        check_present(droplet.size_slug(), "size")?;
        if !has_image_ref(droplet.image.as_ref()) {
            let msg = "Missing required parameter - image id or slug.";
            tracing::error!("{}", msg);
            return Err(Error::InvalidArgument(msg.to_string()));
        }

        self.invoke(
            ApiRequest::new(ApiAction::CreateDroplet).with_body(&CreateDropletBody(droplet))?,
        )
    }

    pub fn delete_droplet(&self, droplet_id: u64) -> Result<Delete, Error> {
        validate_droplet_id(droplet_id)?;
        self.invoke(ApiRequest::new(ApiAction::DeleteDroplet).with_param(droplet_id))
    }

    pub fn reboot_droplet(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::RebootDroplet,
            DropletAction::new(ActionType::Reboot),
        )
    }

    pub fn power_cycle_droplet(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::PowerCycleDroplet,
            DropletAction::new(ActionType::PowerCycle),
        )
    }

    /// Requests a graceful shutdown.
    pub fn shutdown_droplet(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::ShutdownDroplet,
            DropletAction::new(ActionType::Shutdown),
        )
    }

    /// Cuts power immediately, like pulling the plug.
    pub fn power_off_droplet(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::PowerOffDroplet,
            DropletAction::new(ActionType::PowerOff),
        )
    }

    pub fn power_on_droplet(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::PowerOnDroplet,
            DropletAction::new(ActionType::PowerOn),
        )
    }

    /// Resets the root password; the new one is emailed to the account owner.
    pub fn reset_droplet_password(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::ResetDropletPassword,
            DropletAction::new(ActionType::PasswordReset),
        )
    }

    pub fn resize_droplet(&self, droplet_id: u64, size: &str) -> Result<Action, Error> {
        validate_droplet_id(droplet_id)?;
        check_not_empty(size, "size")?;
        self.droplet_action(
            droplet_id,
            ApiAction::ResizeDroplet,
            DropletAction::new(ActionType::Resize).with_size(size),
        )
    }

    /// Snapshots the droplet, optionally naming the snapshot image.
    pub fn take_droplet_snapshot(
        &self,
        droplet_id: u64,
        snapshot_name: Option<&str>,
    ) -> Result<Action, Error> {
        let mut action = DropletAction::new(ActionType::Snapshot);
        if let Some(name) = snapshot_name {
            action = action.with_name(name);
        }
        self.droplet_action(droplet_id, ApiAction::SnapshotDroplet, action)
    }

    /// Restores the droplet from one of its backup or snapshot images.
    pub fn restore_droplet(&self, droplet_id: u64, image_id: u64) -> Result<Action, Error> {
        validate_droplet_id(droplet_id)?;
        check_id(image_id, "image_id")?;
        self.droplet_action(
            droplet_id,
            ApiAction::RestoreDroplet,
            DropletAction::new(ActionType::Restore).with_image(image_id),
        )
    }

    /// Reinstalls the droplet from `image_id`, keeping its id and addresses.
    pub fn rebuild_droplet(&self, droplet_id: u64, image_id: u64) -> Result<Action, Error> {
        validate_droplet_id(droplet_id)?;
        check_id(image_id, "image_id")?;
        self.droplet_action(
            droplet_id,
            ApiAction::RebuildDroplet,
            DropletAction::new(ActionType::Rebuild).with_image(image_id),
        )
    }

    pub fn disable_droplet_backups(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::DisableDropletBackups,
            DropletAction::new(ActionType::DisableBackups),
        )
    }

    pub fn rename_droplet(&self, droplet_id: u64, name: &str) -> Result<Action, Error> {
        validate_droplet_id(droplet_id)?;
        check_not_empty(name, "name")?;
        self.droplet_action(
            droplet_id,
            ApiAction::RenameDroplet,
            DropletAction::new(ActionType::Rename).with_name(name),
        )
    }

    pub fn change_droplet_kernel(&self, droplet_id: u64, kernel_id: u64) -> Result<Action, Error> {
        validate_droplet_id(droplet_id)?;
        check_id(kernel_id, "kernel_id")?;
        self.droplet_action(
            droplet_id,
            ApiAction::ChangeDropletKernel,
            DropletAction::new(ActionType::ChangeKernel).with_kernel(kernel_id),
        )
    }

    pub fn enable_droplet_ipv6(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::EnableDropletIpv6,
            DropletAction::new(ActionType::EnableIpv6),
        )
    }

    pub fn enable_droplet_private_networking(&self, droplet_id: u64) -> Result<Action, Error> {
        self.droplet_action(
            droplet_id,
            ApiAction::EnableDropletPrivateNetworking,
            DropletAction::new(ActionType::EnablePrivateNetworking),
        )
    }

    fn droplet_action(
        &self,
        droplet_id: u64,
        api_action: ApiAction,
        action: DropletAction,
    ) -> Result<Action, Error> {
        validate_droplet_id(droplet_id)?;
        self.invoke(
            ApiRequest::new(api_action)
                .with_param(droplet_id)
                .with_body(&action)?,
        )
    }
}
