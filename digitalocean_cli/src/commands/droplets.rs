use anyhow::Result;
use clap::{Args, Subcommand};
use digitalocean_api::types::{Action, Droplet, Image, Key};
use digitalocean_api::Client;

use super::PageArgs;
use crate::output::{
    print_actions, print_deleted, print_droplets, print_images, print_kernels, print_page_footer,
    OutputFormat,
};

#[derive(Args)]
pub struct DropletsArgs {
    #[command(subcommand)]
    pub command: DropletCommand,
}

#[derive(Args)]
pub struct DropletId {
    /// Droplet ID
    pub id: u64,
}

#[derive(Args)]
pub struct DropletPage {
    /// Droplet ID
    pub id: u64,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Droplet name, also used as its hostname
    pub name: String,

    /// Region slug (e.g. nyc3)
    #[arg(long)]
    pub region: String,

    /// Size slug (e.g. 512mb)
    #[arg(long)]
    pub size: String,

    /// Image ID or slug (e.g. ubuntu-14-04-x64)
    #[arg(long)]
    pub image: String,

    /// SSH key ID or fingerprint to install (repeatable)
    #[arg(long = "ssh-key")]
    pub ssh_keys: Vec<String>,

    /// Enable automatic backups
    #[arg(long)]
    pub backups: bool,

    /// Enable IPv6 networking
    #[arg(long)]
    pub ipv6: bool,

    /// Enable private networking
    #[arg(long)]
    pub private_networking: bool,

    /// Cloud-init user data
    #[arg(long)]
    pub user_data: Option<String>,
}

#[derive(Subcommand)]
pub enum DropletCommand {
    /// List droplets
    List(PageArgs),
    /// Show one droplet
    Get(DropletId),
    /// Create a droplet
    Create(Box<CreateArgs>),
    /// Destroy a droplet
    Delete(DropletId),
    /// Reboot gracefully
    Reboot(DropletId),
    /// Hard reset (power off, then on)
    PowerCycle(DropletId),
    /// Shut down gracefully
    Shutdown(DropletId),
    /// Cut power immediately
    PowerOff(DropletId),
    PowerOn(DropletId),
    /// Reset the root password; the new one is emailed
    ResetPassword(DropletId),
    /// Resize to another size slug
    Resize {
        id: u64,
        /// Target size slug
        size: String,
    },
    /// Take a snapshot image
    Snapshot {
        id: u64,
        /// Snapshot name
        #[arg(long)]
        name: Option<String>,
    },
    /// Restore from a backup or snapshot image
    Restore {
        id: u64,
        /// Image ID to restore from
        image: u64,
    },
    /// Reinstall from an image, keeping ID and addresses
    Rebuild {
        id: u64,
        /// Image ID to rebuild from
        image: u64,
    },
    DisableBackups(DropletId),
    Rename {
        id: u64,
        /// New droplet name
        name: String,
    },
    ChangeKernel {
        id: u64,
        /// Kernel ID (see `droplets kernels`)
        kernel: u64,
    },
    EnableIpv6(DropletId),
    EnablePrivateNetworking(DropletId),
    /// List kernels the droplet can switch to
    Kernels(DropletPage),
    /// List snapshot images of the droplet
    Snapshots(DropletPage),
    /// List backup images of the droplet
    Backups(DropletPage),
    /// List actions performed on the droplet
    Actions(DropletPage),
}

pub fn run(args: &DropletsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        DropletCommand::List(page) => {
            let resp = client.get_available_droplets(page.page)?;
            print_page_footer(page.page, &resp.links, resp.meta.as_ref(), "droplets");
            print_droplets(&resp.droplets, format)
        }
        DropletCommand::Get(d) => {
            let droplet = client.get_droplet_info(d.id)?;
            print_droplets(&[droplet], format)
        }
        DropletCommand::Create(create) => {
            let droplet = client.create_droplet(&droplet_from_args(create))?;
            print_droplets(&[droplet], format)
        }
        DropletCommand::Delete(d) => {
            let result = client.delete_droplet(d.id)?;
            print_deleted(&format!("droplet {}", d.id), result, format);
            Ok(())
        }
        DropletCommand::Reboot(d) => action(client.reboot_droplet(d.id)?, format),
        DropletCommand::PowerCycle(d) => action(client.power_cycle_droplet(d.id)?, format),
        DropletCommand::Shutdown(d) => action(client.shutdown_droplet(d.id)?, format),
        DropletCommand::PowerOff(d) => action(client.power_off_droplet(d.id)?, format),
        DropletCommand::PowerOn(d) => action(client.power_on_droplet(d.id)?, format),
        DropletCommand::ResetPassword(d) => action(client.reset_droplet_password(d.id)?, format),
        DropletCommand::Resize { id, size } => action(client.resize_droplet(*id, size)?, format),
        DropletCommand::Snapshot { id, name } => {
            action(client.take_droplet_snapshot(*id, name.as_deref())?, format)
        }
        DropletCommand::Restore { id, image } => {
            action(client.restore_droplet(*id, *image)?, format)
        }
        DropletCommand::Rebuild { id, image } => {
            action(client.rebuild_droplet(*id, *image)?, format)
        }
        DropletCommand::DisableBackups(d) => {
            action(client.disable_droplet_backups(d.id)?, format)
        }
        DropletCommand::Rename { id, name } => action(client.rename_droplet(*id, name)?, format),
        DropletCommand::ChangeKernel { id, kernel } => {
            action(client.change_droplet_kernel(*id, *kernel)?, format)
        }
        DropletCommand::EnableIpv6(d) => action(client.enable_droplet_ipv6(d.id)?, format),
        DropletCommand::EnablePrivateNetworking(d) => {
            action(client.enable_droplet_private_networking(d.id)?, format)
        }
        DropletCommand::Kernels(d) => {
            let resp = client.get_available_kernels(d.id, d.page.page)?;
            print_page_footer(d.page.page, &resp.links, resp.meta.as_ref(), "kernels");
            print_kernels(&resp.kernels, format)
        }
        DropletCommand::Snapshots(d) => {
            let resp = client.get_available_snapshots(d.id, d.page.page)?;
            print_page_footer(d.page.page, &resp.links, resp.meta.as_ref(), "snapshots");
            print_images(&resp.snapshots, format)
        }
        DropletCommand::Backups(d) => {
            let resp = client.get_available_backups(d.id, d.page.page)?;
            print_page_footer(d.page.page, &resp.links, resp.meta.as_ref(), "backups");
            print_images(&resp.backups, format)
        }
        DropletCommand::Actions(d) => {
            let resp = client.get_available_droplet_actions(d.id, d.page.page)?;
            print_page_footer(d.page.page, &resp.links, resp.meta.as_ref(), "actions");
            print_actions(&resp.actions, format)
        }
    }
}

fn action(action: Action, format: &OutputFormat) -> Result<()> {
    if *format != OutputFormat::Json {
        eprintln!(
            "Action {} is {}; check it with `actions get {}`",
            action.id, action.status, action.id
        );
    }
    print_actions(&[action], format)
}

fn droplet_from_args(args: &CreateArgs) -> Droplet {
    let mut droplet = Droplet::new(&args.name, &args.region, &args.size, image_ref(&args.image));
    droplet.ssh_keys = args.ssh_keys.iter().map(String::as_str).map(key_ref).collect();
    droplet.backups = args.backups.then_some(true);
    droplet.ipv6 = args.ipv6.then_some(true);
    droplet.private_networking = args.private_networking.then_some(true);
    droplet.user_data = args.user_data.clone();
    droplet
}

/// Numeric values are image IDs, anything else is a slug.
fn image_ref(value: &str) -> Image {
    match value.parse::<u64>() {
        Ok(id) => Image::from_id(id),
        Err(_) => Image::from_slug(value),
    }
}

/// Numeric values are key IDs, anything else is a fingerprint.
fn key_ref(value: &str) -> Key {
    match value.parse::<u64>() {
        Ok(id) => Key::from_id(id),
        Err(_) => Key::from_fingerprint(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args() -> CreateArgs {
        CreateArgs {
            name: "web-1".to_string(),
            region: "nyc3".to_string(),
            size: "512mb".to_string(),
            image: "ubuntu-14-04-x64".to_string(),
            ssh_keys: vec![
                "512189".to_string(),
                "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa".to_string(),
            ],
            backups: false,
            ipv6: true,
            private_networking: false,
            user_data: None,
        }
    }

    #[test]
    fn test_image_ref_numeric_is_id() {
        assert_eq!(image_ref("6918990").id, Some(6918990));
        assert_eq!(image_ref("coreos-stable").slug.as_deref(), Some("coreos-stable"));
    }

    #[test]
    fn test_droplet_from_args() {
        let droplet = droplet_from_args(&create_args());
        assert_eq!(droplet.name.as_deref(), Some("web-1"));
        assert_eq!(droplet.region_slug(), Some("nyc3"));
        assert_eq!(droplet.size_slug(), Some("512mb"));
        assert_eq!(
            droplet.ssh_keys,
            vec![
                Key::from_id(512189),
                Key::from_fingerprint("3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa"),
            ]
        );
        // Unset flags stay unset so they are left out of the request.
        assert_eq!(droplet.backups, None);
        assert_eq!(droplet.ipv6, Some(true));
    }
}
