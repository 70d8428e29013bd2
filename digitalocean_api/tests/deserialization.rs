use digitalocean_api::types::{
    Actions, ActionStatus, DomainRecords, Domains, Droplet, DropletStatus, Droplets, Images,
    Kernels, Keys, Netmask, Regions, Sizes,
};
use digitalocean_api::{ApiAction, ApiResponse, Delete, Payload};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_droplets_full() {
    let json = load_fixture("droplets.json");
    let resp: Droplets = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.droplets.len(), 1);
    assert_eq!(resp.meta.as_ref().unwrap().total, 3);
    assert_eq!(resp.links.next_page(), Some(2));
    assert_eq!(resp.links.last_page(), Some(3));

    let droplet = &resp.droplets[0];
    assert_eq!(droplet.id, Some(3164444));
    assert_eq!(droplet.status, Some(DropletStatus::Active));
    assert_eq!(droplet.size_slug(), Some("512mb"));
    assert_eq!(droplet.region_slug(), Some("nyc3"));
    assert_eq!(droplet.backup_ids, vec![7938002]);
    assert_eq!(droplet.kernel.as_ref().unwrap().id, 2233);
    assert_eq!(droplet.public_ipv4(), Some("104.236.32.182"));

    let image = droplet.image.as_ref().unwrap();
    assert_eq!(image.slug.as_deref(), Some("ubuntu-14-04-x64"));
    assert!(image.public);
    assert!(image.created_at.is_some());

    let networks = droplet.networks.as_ref().unwrap();
    assert_eq!(
        networks.v4[0].netmask,
        Some(Netmask::Dotted("255.255.192.0".to_string()))
    );
    assert_eq!(networks.v6[0].netmask, Some(Netmask::Prefix(64)));
}

#[test]
fn singular_droplet_is_unwrapped_from_its_element() {
    let json = load_fixture("droplet.json");
    let resp = ApiResponse::<Droplet>::decode(ApiAction::GetDropletInfo, &json).unwrap();
    assert!(resp.is_success());
    let droplet = resp.into_data().unwrap();
    assert_eq!(droplet.id, Some(3164494));
    assert_eq!(droplet.status, Some(DropletStatus::New));
    assert_eq!(droplet.locked, Some(true));
    assert!(droplet.public_ipv4().is_none());
    assert_eq!(droplet.region.unwrap().sizes, vec!["512mb", "1gb"]);
}

#[test]
fn deserialize_images_with_null_slug() {
    let json = load_fixture("images.json");
    let resp: Images = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.images.len(), 2);
    assert!(resp.images[0].slug.is_none());
    assert!(!resp.images[0].public);
    assert_eq!(resp.images[1].min_disk_size, Some(20));
    assert!(resp.links.pages.is_none());
    assert_eq!(resp.links.next_page(), None);
}

#[test]
fn deserialize_actions_in_every_state() {
    let json = load_fixture("actions.json");
    let resp: Actions = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.actions[0].status, ActionStatus::InProgress);
    assert!(resp.actions[0].completed_at.is_none());
    assert_eq!(resp.actions[1].status, ActionStatus::Errored);
    assert!(resp.actions[1].completed_at.is_some());

    // Last page of results: no `next` link.
    assert_eq!(resp.links.next_page(), None);
    assert_eq!(resp.links.last_page(), Some(2));
}

#[test]
fn deserialize_regions_and_sizes() {
    let regions: Regions = serde_json::from_str(&load_fixture("regions.json")).unwrap();
    assert_eq!(regions.regions.len(), 2);
    assert!(!regions.regions[0].available);
    assert_eq!(regions.regions[1].slug, "ams1");

    let sizes: Sizes = serde_json::from_str(&load_fixture("sizes.json")).unwrap();
    assert_eq!(sizes.sizes[1].memory, 1024);
    assert_eq!(sizes.sizes[1].price_hourly, 0.01488);
}

#[test]
fn deserialize_domains_and_records() {
    let domains: Domains = serde_json::from_str(&load_fixture("domains.json")).unwrap();
    assert_eq!(domains.domains[0].ttl, Some(1800));
    assert!(domains.domains[0]
        .zone_file
        .as_deref()
        .unwrap()
        .starts_with("$ORIGIN example.com."));

    let records: DomainRecords =
        serde_json::from_str(&load_fixture("domain_records.json")).unwrap();
    assert_eq!(records.domain_records.len(), 3);
    let srv = &records.domain_records[2];
    assert_eq!(srv.record_type, "SRV");
    assert_eq!(srv.port, Some(5222));
    assert_eq!(srv.weight, Some(10));
    assert!(records.domain_records[0].priority.is_none());
}

#[test]
fn deserialize_keys_and_kernels() {
    let keys: Keys = serde_json::from_str(&load_fixture("keys.json")).unwrap();
    assert_eq!(keys.ssh_keys[0].id, Some(512189));
    assert_eq!(
        keys.ssh_keys[0].fingerprint.as_deref(),
        Some("3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa")
    );

    let kernels: Kernels = serde_json::from_str(&load_fixture("kernels.json")).unwrap();
    assert_eq!(kernels.kernels.len(), 2);
    assert_eq!(kernels.links.last_page(), Some(124));
    assert_eq!(kernels.meta.unwrap().total, 247);
}

#[test]
fn boolean_bodies_bypass_the_element_lookup() {
    let resp = ApiResponse::<Delete>::decode(ApiAction::DeleteKey, "true").unwrap();
    assert_eq!(resp.payload(), &Payload::Boolean(true));
    assert!(resp.into_data().unwrap().is_success());

    let resp = ApiResponse::<Delete>::decode(ApiAction::DeleteKey, "false").unwrap();
    assert!(!resp.into_data().unwrap().is_success());
}

#[test]
fn boolean_body_cannot_become_a_resource() {
    let resp = ApiResponse::<Droplet>::decode(ApiAction::GetDropletInfo, "true").unwrap();
    assert!(resp.into_data().is_err());
}

#[test]
fn malformed_and_misnamed_bodies_are_decode_errors() {
    let err = ApiResponse::<Droplets>::decode(ApiAction::AvailableDroplets, "{not valid json}")
        .unwrap_err();
    assert!(matches!(err, digitalocean_api::Error::Decode(_)));

    let err = ApiResponse::<Droplet>::decode(ApiAction::GetDropletInfo, r#"{"image":{}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("droplet"));
}

#[test]
fn null_lists_and_strings_read_as_empty() {
    let body = r#"{"droplet":{"id":1,"features":null,"backup_ids":null,"ssh_keys":null,
        "kernel":{"id":7,"name":null,"version":null},
        "networks":{"v4":null,"v6":[{"ip_address":"::1","type":null}]},
        "region":{"slug":"nyc3","name":null,"sizes":null,"available":null,"features":null},
        "size":{"slug":"512mb","memory":null,"price_hourly":null,"regions":null},
        "image":{"id":2,"public":null,"regions":null}}}"#;
    let droplet = ApiResponse::<Droplet>::decode(ApiAction::GetDropletInfo, body)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(droplet.id, Some(1));
    assert!(droplet.features.is_empty());
    assert!(droplet.backup_ids.is_empty());
    assert!(droplet.ssh_keys.is_empty());
    assert_eq!(droplet.kernel.as_ref().unwrap().name, "");
    let networks = droplet.networks.as_ref().unwrap();
    assert!(networks.v4.is_empty());
    assert_eq!(networks.v6[0].network_type, "");
    let region = droplet.region.as_ref().unwrap();
    assert_eq!(region.slug, "nyc3");
    assert!(!region.available);
    assert!(region.sizes.is_empty());
    assert_eq!(droplet.size.as_ref().unwrap().memory, 0);
    assert!(!droplet.image.as_ref().unwrap().public);

    let images: Images = serde_json::from_str(r#"{"images":[],"meta":{"total":null}}"#).unwrap();
    assert_eq!(images.meta.unwrap().total, 0);
}
