//! blkscout core: block device classification and filtering for installer
//! tooling.
//!
//! Given raw records from the device inventory boundary, decides which
//! represent drives vs. partitions, assigns each partition a semantic role,
//! applies the configured exclusion policy and renders the survivors as
//! tabular text. Strictly read-only: nothing here ever modifies a device.

pub mod config;
pub mod devname;
pub mod engine;
pub mod error;
pub mod format;
pub mod fstype;
pub mod inventory;
pub mod liveboot;
pub mod parttype;
pub mod record;

pub use config::Config;
pub use engine::{DriveEntry, Engine, PartitionEntry};
pub use error::{ScoutError, ScoutResult};
pub use inventory::{DeviceQuery, FakeInventory, Inventory, LsblkInventory};
pub use record::{DeviceKind, DeviceRecord};
