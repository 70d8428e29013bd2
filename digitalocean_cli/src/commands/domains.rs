use anyhow::Result;
use clap::{Args, Subcommand};
use digitalocean_api::types::{Domain, DomainRecord};
use digitalocean_api::Client;

use super::PageArgs;
use crate::output::{print_deleted, print_domains, print_page_footer, print_records, OutputFormat};

#[derive(Args)]
pub struct DomainsArgs {
    #[command(subcommand)]
    pub command: DomainCommand,
}

#[derive(Subcommand)]
pub enum DomainCommand {
    /// List domains
    List(PageArgs),
    /// Show one domain, including its zone file
    Get {
        /// Domain name
        name: String,
    },
    /// Add a domain with an apex A record
    Create {
        /// Domain name (e.g. example.com)
        name: String,
        /// IP address for the apex A record
        #[arg(long)]
        ip: String,
    },
    /// Remove a domain and all its records
    Delete {
        name: String,
    },
}

#[derive(Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    pub command: RecordCommand,
}

#[derive(Subcommand)]
pub enum RecordCommand {
    /// List every record of a domain
    List {
        domain: String,
    },
    Get {
        domain: String,
        id: u64,
    },
    /// Add a record to a domain
    Create(Box<CreateRecordArgs>),
    /// Change the name of a record
    Rename {
        domain: String,
        id: u64,
        name: String,
    },
    Delete {
        domain: String,
        id: u64,
    },
}

#[derive(Args)]
pub struct CreateRecordArgs {
    pub domain: String,

    /// Record type: A, AAAA, CNAME, MX, TXT, SRV or NS
    #[arg(long = "type")]
    pub record_type: String,

    /// Host name (`@` for the apex)
    #[arg(long)]
    pub name: Option<String>,

    /// Value: address, target host or text
    #[arg(long)]
    pub data: Option<String>,

    /// Priority (MX and SRV)
    #[arg(long)]
    pub priority: Option<u32>,

    /// Port (SRV)
    #[arg(long)]
    pub port: Option<u32>,

    /// Weight (SRV)
    #[arg(long)]
    pub weight: Option<u32>,
}

pub fn run_domains(args: &DomainsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        DomainCommand::List(page) => {
            let resp = client.get_available_domains(Some(page.page))?;
            print_page_footer(page.page, &resp.links, resp.meta.as_ref(), "domains");
            print_domains(&resp.domains, format)
        }
        DomainCommand::Get { name } => {
            let domain = client.get_domain_info(name)?;
            if *format == OutputFormat::Table {
                if let Some(zone_file) = &domain.zone_file {
                    eprintln!("{}", zone_file);
                }
            }
            print_domains(&[domain], format)
        }
        DomainCommand::Create { name, ip } => {
            let domain = client.create_domain(&Domain::new(name, ip))?;
            print_domains(&[domain], format)
        }
        DomainCommand::Delete { name } => {
            let result = client.delete_domain(name)?;
            print_deleted(&format!("domain {}", name), result, format);
            Ok(())
        }
    }
}

pub fn run_records(args: &RecordsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        RecordCommand::List { domain } => {
            let resp = client.get_domain_records(domain)?;
            print_records(&resp.domain_records, format)
        }
        RecordCommand::Get { domain, id } => {
            let record = client.get_domain_record_info(domain, *id)?;
            print_records(&[record], format)
        }
        RecordCommand::Create(create) => {
            let record = client.create_domain_record(&create.domain, &record_from_args(create))?;
            print_records(&[record], format)
        }
        RecordCommand::Rename { domain, id, name } => {
            let record = client.update_domain_record(domain, *id, name)?;
            print_records(&[record], format)
        }
        RecordCommand::Delete { domain, id } => {
            let result = client.delete_domain_record(domain, *id)?;
            print_deleted(&format!("record {} of {}", id, domain), result, format);
            Ok(())
        }
    }
}

fn record_from_args(args: &CreateRecordArgs) -> DomainRecord {
    DomainRecord {
        id: None,
        record_type: args.record_type.to_uppercase(),
        name: args.name.clone(),
        data: args.data.clone(),
        priority: args.priority,
        port: args.port,
        weight: args.weight,
    }
}
