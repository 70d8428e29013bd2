use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use digitalocean_api::types::{
    Action, Domain, DomainRecord, Droplet, Image, Kernel, Key, Links, Meta, Region, Size,
};
use digitalocean_api::Delete;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!(
                "unknown output format '{}': expected table, json, csv or markdown",
                other
            ),
        }
    }
}

#[derive(Tabled, Serialize)]
struct DropletRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "Image")]
    #[serde(rename = "Image")]
    image: String,
    #[tabled(rename = "Public IPv4")]
    #[serde(rename = "Public IPv4")]
    ipv4: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct ImageRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Distribution")]
    #[serde(rename = "Distribution")]
    distribution: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Public")]
    #[serde(rename = "Public")]
    public: bool,
    #[tabled(rename = "Regions")]
    #[serde(rename = "Regions")]
    regions: String,
}

#[derive(Tabled, Serialize)]
struct RegionRow {
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Available")]
    #[serde(rename = "Available")]
    available: bool,
    #[tabled(rename = "Sizes")]
    #[serde(rename = "Sizes")]
    sizes: String,
}

#[derive(Tabled, Serialize)]
struct SizeRow {
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Memory")]
    #[serde(rename = "Memory")]
    memory: String,
    #[tabled(rename = "vCPUs")]
    #[serde(rename = "vCPUs")]
    vcpus: u32,
    #[tabled(rename = "Disk")]
    #[serde(rename = "Disk")]
    disk: String,
    #[tabled(rename = "Monthly")]
    #[serde(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Hourly")]
    #[serde(rename = "Hourly")]
    hourly: String,
}

#[derive(Tabled, Serialize)]
struct ActionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    action_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Resource")]
    #[serde(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Started")]
    #[serde(rename = "Started")]
    started: String,
    #[tabled(rename = "Completed")]
    #[serde(rename = "Completed")]
    completed: String,
}

#[derive(Tabled, Serialize)]
struct KernelRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Version")]
    #[serde(rename = "Version")]
    version: String,
}

#[derive(Tabled, Serialize)]
struct DomainRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "TTL")]
    #[serde(rename = "TTL")]
    ttl: String,
}

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    record_type: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Data")]
    #[serde(rename = "Data")]
    data: String,
    #[tabled(rename = "Priority")]
    #[serde(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Port")]
    #[serde(rename = "Port")]
    port: String,
    #[tabled(rename = "Weight")]
    #[serde(rename = "Weight")]
    weight: String,
}

#[derive(Tabled, Serialize)]
struct KeyRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Fingerprint")]
    #[serde(rename = "Fingerprint")]
    fingerprint: String,
}

// -- Row builders --

fn build_droplet_rows(droplets: &[Droplet]) -> Vec<DropletRow> {
    droplets
        .iter()
        .map(|d| DropletRow {
            id: d.id.unwrap_or_default(),
            name: d.name.clone().unwrap_or_default(),
            status: d.status.map(|s| s.to_string()).unwrap_or_default(),
            region: d.region_slug().unwrap_or_default().to_string(),
            size: d.size_slug().unwrap_or_default().to_string(),
            image: d.image.as_ref().map(image_label).unwrap_or_default(),
            ipv4: d.public_ipv4().unwrap_or_default().to_string(),
            created: format_time(d.created_at.as_ref()),
        })
        .collect()
}

fn build_image_rows(images: &[Image]) -> Vec<ImageRow> {
    images
        .iter()
        .map(|i| ImageRow {
            id: i.id.unwrap_or_default(),
            name: i.name.clone().unwrap_or_default(),
            distribution: i.distribution.clone().unwrap_or_default(),
            slug: i.slug.clone().unwrap_or_default(),
            public: i.public,
            regions: i.regions.join(","),
        })
        .collect()
}

fn build_region_rows(regions: &[Region]) -> Vec<RegionRow> {
    regions
        .iter()
        .map(|r| RegionRow {
            slug: r.slug.clone(),
            name: r.name.clone(),
            available: r.available,
            sizes: r.sizes.join(","),
        })
        .collect()
}

fn build_size_rows(sizes: &[Size]) -> Vec<SizeRow> {
    sizes
        .iter()
        .map(|s| SizeRow {
            slug: s.slug.clone(),
            memory: format_memory(s.memory),
            vcpus: s.vcpus,
            disk: format!("{} GB", s.disk),
            monthly: format!("${:.2}", s.price_monthly),
            hourly: format!("${:.5}", s.price_hourly),
        })
        .collect()
}

fn build_action_rows(actions: &[Action]) -> Vec<ActionRow> {
    actions
        .iter()
        .map(|a| ActionRow {
            id: a.id,
            action_type: a.action_type.clone(),
            status: a.status.to_string(),
            resource: match (&a.resource_type, a.resource_id) {
                (Some(kind), Some(id)) => format!("{} {}", kind, id),
                (None, Some(id)) => id.to_string(),
                _ => String::new(),
            },
            started: format_time(a.started_at.as_ref()),
            completed: format_time(a.completed_at.as_ref()),
        })
        .collect()
}

fn build_kernel_rows(kernels: &[Kernel]) -> Vec<KernelRow> {
    kernels
        .iter()
        .map(|k| KernelRow {
            id: k.id,
            name: k.name.clone(),
            version: k.version.clone(),
        })
        .collect()
}

fn build_domain_rows(domains: &[Domain]) -> Vec<DomainRow> {
    domains
        .iter()
        .map(|d| DomainRow {
            name: d.name.clone(),
            ttl: optional(d.ttl),
        })
        .collect()
}

fn build_record_rows(records: &[DomainRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            id: r.id.unwrap_or_default(),
            record_type: r.record_type.clone(),
            name: r.name.clone().unwrap_or_default(),
            data: r.data.clone().unwrap_or_default(),
            priority: optional(r.priority),
            port: optional(r.port),
            weight: optional(r.weight),
        })
        .collect()
}

fn build_key_rows(keys: &[Key]) -> Vec<KeyRow> {
    keys.iter()
        .map(|k| KeyRow {
            id: k.id.unwrap_or_default(),
            name: k.name.clone().unwrap_or_default(),
            fingerprint: k.fingerprint.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Rendering --

/// JSON output prints the resources as returned by the API; the other
/// formats print the flattened rows.
fn render<T, R>(data: &T, rows: Vec<R>, format: &OutputFormat) -> Result<()>
where
    T: Serialize + ?Sized,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_droplets(droplets: &[Droplet], format: &OutputFormat) -> Result<()> {
    render(droplets, build_droplet_rows(droplets), format)
}

pub fn print_images(images: &[Image], format: &OutputFormat) -> Result<()> {
    render(images, build_image_rows(images), format)
}

pub fn print_regions(regions: &[Region], format: &OutputFormat) -> Result<()> {
    render(regions, build_region_rows(regions), format)
}

pub fn print_sizes(sizes: &[Size], format: &OutputFormat) -> Result<()> {
    render(sizes, build_size_rows(sizes), format)
}

pub fn print_actions(actions: &[Action], format: &OutputFormat) -> Result<()> {
    render(actions, build_action_rows(actions), format)
}

pub fn print_kernels(kernels: &[Kernel], format: &OutputFormat) -> Result<()> {
    render(kernels, build_kernel_rows(kernels), format)
}

pub fn print_domains(domains: &[Domain], format: &OutputFormat) -> Result<()> {
    render(domains, build_domain_rows(domains), format)
}

pub fn print_records(records: &[DomainRecord], format: &OutputFormat) -> Result<()> {
    render(records, build_record_rows(records), format)
}

pub fn print_keys(keys: &[Key], format: &OutputFormat) -> Result<()> {
    render(keys, build_key_rows(keys), format)
}

pub fn print_deleted(what: &str, result: Delete, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "deleted": result.is_success() })),
        _ if result.is_success() => println!("Deleted {}", what),
        _ => println!("Delete of {} was not confirmed", what),
    }
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Writes the paging summary of a collection to stderr.
pub fn print_page_footer(page: u32, links: &Links, meta: Option<&Meta>, noun: &str) {
    eprintln!("{}", page_footer(page, links, meta, noun));
}

fn page_footer(page: u32, links: &Links, meta: Option<&Meta>, noun: &str) -> String {
    // The last page carries no `last` link.
    let last = links.last_page().unwrap_or(page).max(page);
    match meta {
        Some(meta) => format!("Page {}/{} ({} total {})", page, last, meta.total, noun),
        None => format!("Page {}/{}", page, last),
    }
}

fn image_label(image: &Image) -> String {
    image
        .slug
        .clone()
        .or_else(|| image.name.clone())
        .or_else(|| image.id.map(|id| id.to_string()))
        .unwrap_or_default()
}

fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn format_memory(megabytes: u64) -> String {
    if megabytes >= 1024 && megabytes % 1024 == 0 {
        format!("{} GB", megabytes / 1024)
    } else {
        format!("{} MB", megabytes)
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
