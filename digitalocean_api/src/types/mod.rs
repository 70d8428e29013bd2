use serde::{Deserialize, Deserializer};

mod meta;
pub use self::meta::{Links, Meta, Pages};

mod droplet;
pub use self::droplet::{
    Backups, Droplet, DropletStatus, Droplets, Kernel, Kernels, Netmask, Network, Networks,
    Snapshots,
};

mod image;
pub use self::image::{Image, Images};

mod region;
pub use self::region::{Region, Regions};

mod size;
pub use self::size::{Size, Sizes};

mod action;
pub use self::action::{Action, ActionStatus, ActionType, Actions, DropletAction, ImageAction};

mod domain;
pub use self::domain::{Domain, DomainRecord, DomainRecords, Domains};

mod key;
pub use self::key::{Key, Keys};

/// Reads an explicit `null` as the field's default, the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
