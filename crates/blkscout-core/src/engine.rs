//! Classification and filtering engine.
//!
//! Consumes inventory records plus a read-only [`Config`], applies the
//! exclusion policy and derives the attributes the installer cares about.
//! Records flow through in inventory order; nothing is re-sorted, and one
//! malformed record never aborts a listing.

use crate::config::Config;
use crate::devname;
use crate::error::ScoutResult;
use crate::fstype;
use crate::inventory::{DeviceQuery, Inventory};
use crate::parttype::{self, PartitionRole};
use crate::record::{DeviceKind, DeviceRecord};

/// A partition that survived filtering, enriched for display.
#[derive(Debug, Clone)]
pub struct PartitionEntry {
    pub record: DeviceRecord,
    pub role: PartitionRole,
    /// Filesystem type as rendered (simplified when the option is on).
    pub fs_display: String,
}

/// A drive that survived filtering, with derived attributes.
#[derive(Debug, Clone)]
pub struct DriveEntry {
    pub record: DeviceRecord,
    /// Effective removable state; forced true for USB-attached drives.
    pub removable: bool,
    /// `None` renders as "?": rotational state is unreliable for removable
    /// media and may be missing entirely.
    pub rotational: Option<bool>,
    /// Partitions on this drive, extended boot records not counted.
    pub partition_count: usize,
    /// Non-empty labels across the drive's partitions, in partition order.
    pub labels: Vec<String>,
}

pub struct Engine<'a> {
    inventory: &'a dyn Inventory,
    config: &'a Config,
}

impl<'a> Engine<'a> {
    pub fn new(inventory: &'a dyn Inventory, config: &'a Config) -> Self {
        Engine { inventory, config }
    }

    /// List partitions of one drive, or of every considered drive.
    pub fn partitions(&self, parent: Option<&str>) -> ScoutResult<Vec<PartitionEntry>> {
        self.filter_partitions(parent, false)
    }

    /// List swap partitions only. The swap exclusion toggle does not apply
    /// here: swap cannot be both the thing requested and excluded.
    pub fn swap_partitions(&self) -> ScoutResult<Vec<PartitionEntry>> {
        self.filter_partitions(None, true)
    }

    fn filter_partitions(
        &self,
        parent: Option<&str>,
        swap_only: bool,
    ) -> ScoutResult<Vec<PartitionEntry>> {
        let cfg = self.config;
        let query = match parent {
            Some(p) => DeviceQuery::children_of(p, &cfg.major_numbers),
            None => DeviceQuery::all(&cfg.major_numbers),
        };
        let records = self.inventory.list_devices(&query)?;

        let mut survivors = Vec::new();
        for rec in records {
            if rec.kind != DeviceKind::Partition {
                continue;
            }
            let role = parttype::classify(rec.part_type_id.as_deref().unwrap_or(""));
            // Extended boot records are chaining containers, never targets.
            if role == PartitionRole::ExtendedBootRecord {
                continue;
            }
            if swap_only {
                if !rec.is_swap() {
                    continue;
                }
            } else if cfg.exclude_swap && rec.is_swap() {
                continue;
            }
            if let Some(boot_uuid) = &cfg.live_boot_uuid {
                if rec.uuid.as_deref() == Some(boot_uuid.as_str()) {
                    log::debug!("dropping {}: running live-boot medium", rec.name);
                    continue;
                }
            }
            if cfg.exclude_efi && role.is_efi_or_reserved() {
                continue;
            }
            if !self.passes_min_size(&rec.name) {
                continue;
            }
            let fs_display = self.fs_display(&rec);
            survivors.push(PartitionEntry {
                record: rec,
                role,
                fs_display,
            });
        }
        Ok(survivors)
    }

    /// List drives with derived attributes. A single inventory pass covers
    /// both the drives and their partitions so order is preserved.
    pub fn drives(&self) -> ScoutResult<Vec<DriveEntry>> {
        let cfg = self.config;
        let records = self
            .inventory
            .list_devices(&DeviceQuery::all(&cfg.major_numbers))?;

        let mut drives = Vec::new();
        for rec in &records {
            if rec.kind != DeviceKind::Disk {
                continue;
            }
            if !self.passes_min_size(&rec.name) {
                continue;
            }

            let mut partition_count = 0;
            let mut labels = Vec::new();
            for part in &records {
                if part.kind != DeviceKind::Partition
                    || devname::decompose(&part.name).root != rec.name
                {
                    continue;
                }
                let role = parttype::classify(part.part_type_id.as_deref().unwrap_or(""));
                if role == PartitionRole::ExtendedBootRecord {
                    continue;
                }
                partition_count += 1;
                if let Some(label) = &part.label {
                    labels.push(label.clone());
                }
            }

            let removable =
                rec.removable.unwrap_or(false) || self.inventory.on_usb_bus(&rec.name);
            // Rotational readings lie on removable media; report unknown.
            let rotational = if removable { None } else { rec.rotational };

            drives.push(DriveEntry {
                record: rec.clone(),
                removable,
                rotational,
                partition_count,
                labels,
            });
        }
        Ok(drives)
    }

    /// Locate the EFI system partition of a drive, if it has one. Both the
    /// GPT EFI-system GUID and the legacy MBR EFI/reserved family match.
    pub fn find_esp(&self, drive: &str) -> ScoutResult<Option<String>> {
        self.inventory.ensure_block_device(drive)?;
        let query = DeviceQuery::children_of(drive, &self.config.major_numbers);
        let records = self.inventory.list_devices(&query)?;
        Ok(records
            .into_iter()
            .filter(|r| r.kind == DeviceKind::Partition)
            .find(|r| parttype::classify(r.part_type_id.as_deref().unwrap_or("")).is_esp())
            .map(|r| r.name))
    }

    /// Whether the named partition carries a Linux partition type.
    pub fn is_linux(&self, device: &str) -> ScoutResult<bool> {
        self.inventory.ensure_block_device(device)?;
        let root = devname::decompose(device).root;
        let query = DeviceQuery::children_of(&root, &self.config.major_numbers);
        let records = self.inventory.list_devices(&query)?;
        let rec = records
            .into_iter()
            .find(|r| r.name == device)
            .ok_or_else(|| crate::error::ScoutError::DeviceNotFound(device.to_string()))?;
        Ok(parttype::classify(rec.part_type_id.as_deref().unwrap_or("")).is_linux())
    }

    /// Minimum-size admission. Strict comparison in whole megabytes against
    /// the sector-derived size; an unknown sector count fails closed.
    fn passes_min_size(&self, name: &str) -> bool {
        let Some(min_mb) = self.config.min_size_mb else {
            return true;
        };
        match self.inventory.raw_sector_count(name) {
            Some(sectors) => sectors.saturating_mul(512) / (1024 * 1024) > min_mb,
            None => {
                log::debug!("dropping {name}: raw size unavailable");
                false
            }
        }
    }

    fn fs_display(&self, rec: &DeviceRecord) -> String {
        let raw = rec.fs_type.as_deref().unwrap_or("");
        if self.config.simplify_fs_names {
            fstype::simplify(raw).to_string()
        } else {
            raw.to_string()
        }
    }
}
