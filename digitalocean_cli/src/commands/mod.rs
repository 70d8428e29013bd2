//! CLI subcommand implementations.

pub mod actions;
pub mod domains;
pub mod droplets;
pub mod images;
pub mod keys;
pub mod regions;

use clap::Args;

#[derive(Args)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,
}
