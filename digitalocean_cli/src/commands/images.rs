use anyhow::Result;
use clap::{Args, Subcommand};
use digitalocean_api::types::Image;
use digitalocean_api::Client;

use super::PageArgs;
use crate::output::{print_actions, print_deleted, print_images, print_page_footer, OutputFormat};

#[derive(Args)]
pub struct ImagesArgs {
    #[command(subcommand)]
    pub command: ImageCommand,
}

#[derive(Subcommand)]
pub enum ImageCommand {
    /// List distribution images, snapshots and backups
    List(PageArgs),
    /// Show one image by ID or slug
    Get {
        /// Image ID or slug
        image: String,
    },
    /// Delete a snapshot or backup image
    Delete {
        id: u64,
    },
    /// Rename an image
    Rename {
        id: u64,
        /// New image name
        name: String,
    },
    /// Copy an image to another region
    Transfer {
        id: u64,
        /// Destination region slug
        region: String,
    },
    /// List actions performed on an image
    Actions {
        id: u64,
        #[command(flatten)]
        page: PageArgs,
    },
}

pub fn run(args: &ImagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ImageCommand::List(page) => {
            let resp = client.get_available_images(page.page)?;
            print_page_footer(page.page, &resp.links, resp.meta.as_ref(), "images");
            print_images(&resp.images, format)
        }
        ImageCommand::Get { image } => {
            let found = match image.parse::<u64>() {
                Ok(id) => client.get_image_info(id)?,
                Err(_) => client.get_image_info_by_slug(image)?,
            };
            print_images(&[found], format)
        }
        ImageCommand::Delete { id } => {
            let result = client.delete_image(*id)?;
            print_deleted(&format!("image {}", id), result, format);
            Ok(())
        }
        ImageCommand::Rename { id, name } => {
            let image = Image {
                name: Some(name.clone()),
                ..Image::from_id(*id)
            };
            let updated = client.update_image(&image)?;
            print_images(&[updated], format)
        }
        ImageCommand::Transfer { id, region } => {
            let action = client.transfer_image(*id, region)?;
            print_actions(&[action], format)
        }
        ImageCommand::Actions { id, page } => {
            let resp = client.get_available_image_actions(*id, page.page)?;
            print_page_footer(page.page, &resp.links, resp.meta.as_ref(), "actions");
            print_actions(&resp.actions, format)
        }
    }
}
