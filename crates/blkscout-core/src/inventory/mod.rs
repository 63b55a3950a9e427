//! Device inventory boundary.
//!
//! The engine never talks to the operating system directly; it goes through
//! the [`Inventory`] trait. `LsblkInventory` is the real backend, `FakeInventory`
//! a recording stand-in for tests.

pub mod fake;
pub mod lsblk;
pub mod sysfs;

use std::collections::BTreeSet;

use crate::error::ScoutResult;
use crate::record::DeviceRecord;

pub use fake::FakeInventory;
pub use lsblk::LsblkInventory;

/// Constraints for one inventory listing.
#[derive(Debug, Clone, Default)]
pub struct DeviceQuery {
    /// Restrict to one parent drive (bare name, e.g. `sda`).
    pub parent: Option<String>,
    /// Restrict to these device major numbers.
    pub majors: Option<BTreeSet<u32>>,
}

impl DeviceQuery {
    pub fn all(majors: &BTreeSet<u32>) -> Self {
        DeviceQuery {
            parent: None,
            majors: Some(majors.clone()),
        }
    }

    pub fn children_of(parent: &str, majors: &BTreeSet<u32>) -> Self {
        DeviceQuery {
            parent: Some(parent.to_string()),
            majors: Some(majors.clone()),
        }
    }
}

/// External collaborator boundary for block-device enumeration.
pub trait Inventory {
    /// List devices and partitions in the order the OS reports them.
    /// Individual malformed records are skipped; only a total failure to
    /// query is an error.
    fn list_devices(&self, query: &DeviceQuery) -> ScoutResult<Vec<DeviceRecord>>;

    /// Raw 512-byte sector count from per-device size metadata. `None` when
    /// the device has no such entry; minimum-size filtering fails closed on
    /// that.
    fn raw_sector_count(&self, name: &str) -> Option<u64>;

    /// Whether the drive's device path traverses a USB bus.
    fn on_usb_bus(&self, name: &str) -> bool;

    /// Check that `name` refers to an existing block device node.
    fn ensure_block_device(&self, name: &str) -> ScoutResult<()>;
}
