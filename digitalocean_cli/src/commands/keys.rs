use anyhow::Result;
use clap::{Args, Subcommand};
use digitalocean_api::types::Key;
use digitalocean_api::Client;

use super::PageArgs;
use crate::output::{print_deleted, print_keys, print_page_footer, OutputFormat};

#[derive(Args)]
pub struct KeysArgs {
    #[command(subcommand)]
    pub command: KeyCommand,
}

#[derive(Subcommand)]
pub enum KeyCommand {
    /// List SSH keys on the account
    List(PageArgs),
    /// Show one key by ID or fingerprint
    Get {
        /// Key ID or fingerprint
        key: String,
    },
    /// Upload a public key
    Create {
        /// Key name
        name: String,
        /// Path to the public key file (e.g. ~/.ssh/id_rsa.pub)
        #[arg(long)]
        public_key_file: std::path::PathBuf,
    },
    /// Rename a key
    Rename {
        /// Key ID or fingerprint
        key: String,
        /// New key name
        name: String,
    },
    /// Remove a key from the account
    Delete {
        /// Key ID or fingerprint
        key: String,
    },
}

/// A key is addressed by numeric ID or by its colon-separated fingerprint.
enum KeyRef<'a> {
    Id(u64),
    Fingerprint(&'a str),
}

fn parse_key_ref(value: &str) -> KeyRef<'_> {
    match value.parse::<u64>() {
        Ok(id) => KeyRef::Id(id),
        Err(_) => KeyRef::Fingerprint(value),
    }
}

pub fn run(args: &KeysArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        KeyCommand::List(page) => {
            let resp = client.get_available_keys(Some(page.page))?;
            print_page_footer(page.page, &resp.links, resp.meta.as_ref(), "keys");
            print_keys(&resp.ssh_keys, format)
        }
        KeyCommand::Get { key } => {
            let found = match parse_key_ref(key) {
                KeyRef::Id(id) => client.get_key_info(id)?,
                KeyRef::Fingerprint(fp) => client.get_key_info_by_fingerprint(fp)?,
            };
            print_keys(&[found], format)
        }
        KeyCommand::Create {
            name,
            public_key_file,
        } => {
            let public_key = std::fs::read_to_string(public_key_file)?;
            let created = client.create_key(&Key::new(name, public_key.trim()))?;
            print_keys(&[created], format)
        }
        KeyCommand::Rename { key, name } => {
            let updated = match parse_key_ref(key) {
                KeyRef::Id(id) => client.update_key(id, name)?,
                KeyRef::Fingerprint(fp) => client.update_key_by_fingerprint(fp, name)?,
            };
            print_keys(&[updated], format)
        }
        KeyCommand::Delete { key } => {
            let result = match parse_key_ref(key) {
                KeyRef::Id(id) => client.delete_key(id)?,
                KeyRef::Fingerprint(fp) => client.delete_key_by_fingerprint(fp)?,
            };
            print_deleted(&format!("key {}", key), result, format);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_ref() {
        assert!(matches!(parse_key_ref("512189"), KeyRef::Id(512189)));
        assert!(matches!(
            parse_key_ref("3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa"),
            KeyRef::Fingerprint(fp) if fp.starts_with("3b:16")
        ));
    }
}
