//! Typed device records.
//!
//! The inventory boundary hands back loosely structured key=value fields;
//! this module turns them into a strongly typed record so the engine can
//! state its invariants on real optionals instead of empty strings.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Disk,
    Partition,
}

impl DeviceKind {
    /// Map an inventory TYPE field. Device classes we never report
    /// (loop, rom, lvm, ...) yield `None` and the record is skipped.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "disk" => Some(DeviceKind::Disk),
            "part" => Some(DeviceKind::Partition),
            _ => None,
        }
    }
}

/// One block device or partition as reported by the inventory source.
/// Immutable once read; missing attributes stay `None` rather than "".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub name: String,
    /// Display size in bytes. Distinct from the sysfs sector count used for
    /// minimum-size filtering; the two are sourced independently.
    pub size_bytes: u64,
    pub kind: DeviceKind,
    pub rotational: Option<bool>,
    pub removable: Option<bool>,
    pub fs_type: Option<String>,
    pub part_type_id: Option<String>,
    pub uuid: Option<String>,
    pub model: Option<String>,
    pub label: Option<String>,
}

impl DeviceRecord {
    /// Build a record from one parsed inventory line. Returns `None` for
    /// malformed or irrelevant lines; those are skipped silently.
    pub fn from_fields(fields: &HashMap<String, String>) -> Option<Self> {
        let name = fields.get("NAME")?;
        if name.is_empty() {
            return None;
        }
        let kind = DeviceKind::from_raw(fields.get("TYPE").map_or("", String::as_str))?;
        let size_bytes = fields
            .get("SIZE")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0);

        Some(DeviceRecord {
            name: name.clone(),
            size_bytes,
            kind,
            rotational: flag(fields.get("ROTA")),
            removable: flag(fields.get("RM")),
            fs_type: non_empty(fields.get("FSTYPE")),
            part_type_id: non_empty(fields.get("PARTTYPE")),
            uuid: non_empty(fields.get("UUID")),
            model: non_empty(fields.get("MODEL")),
            label: non_empty(fields.get("LABEL")),
        })
    }

    pub fn is_swap(&self) -> bool {
        self.fs_type.as_deref() == Some("swap")
    }
}

fn non_empty(v: Option<&String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn flag(v: Option<&String>) -> Option<bool> {
    match v.map(String::as_str) {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}
