use anyhow::Result;
use digitalocean_api::Client;

use super::PageArgs;
use crate::output::{print_page_footer, print_regions, print_sizes, OutputFormat};

pub fn run_regions(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_available_regions(args.page)?;
    print_page_footer(args.page, &resp.links, resp.meta.as_ref(), "regions");
    print_regions(&resp.regions, format)
}

pub fn run_sizes(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_available_sizes(args.page)?;
    print_page_footer(args.page, &resp.links, resp.meta.as_ref(), "sizes");
    print_sizes(&resp.sizes, format)
}
