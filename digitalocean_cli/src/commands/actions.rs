use anyhow::Result;
use clap::{Args, Subcommand};
use digitalocean_api::Client;

use super::PageArgs;
use crate::output::{print_actions, print_page_footer, OutputFormat};

#[derive(Args)]
pub struct ActionsArgs {
    #[command(subcommand)]
    pub command: ActionCommand,
}

#[derive(Subcommand)]
pub enum ActionCommand {
    /// List every action on the account, newest first
    List(PageArgs),
    /// Show one action, e.g. to check whether it has completed
    Get {
        /// Action ID
        id: u64,
    },
}

pub fn run(args: &ActionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ActionCommand::List(page) => {
            let resp = client.get_available_actions(page.page)?;
            print_page_footer(page.page, &resp.links, resp.meta.as_ref(), "actions");
            print_actions(&resp.actions, format)
        }
        ActionCommand::Get { id } => {
            let action = client.get_action_info(*id)?;
            print_actions(&[action], format)
        }
    }
}
