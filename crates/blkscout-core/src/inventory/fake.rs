//! Fake inventory implementation for testing.
//!
//! Serves canned records without touching the system, so engine behavior
//! can be tested in CI without root privileges or real hardware.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::{DeviceQuery, Inventory};
use crate::devname;
use crate::error::{ScoutError, ScoutResult};
use crate::record::DeviceRecord;

#[derive(Debug, Default)]
struct FakeState {
    records: Vec<DeviceRecord>,
    sectors: HashMap<String, u64>,
    usb_drives: HashSet<String>,
    queries: Vec<DeviceQuery>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeInventory {
    state: Arc<Mutex<FakeState>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<DeviceRecord>) -> Self {
        let fake = Self::new();
        fake.state.lock().unwrap().records = records;
        fake
    }

    pub fn push_record(&self, record: DeviceRecord) {
        self.state.lock().unwrap().records.push(record);
    }

    /// Seed the raw sector count backing the minimum-size filter.
    pub fn set_sectors(&self, name: &str, sectors: u64) {
        self.state
            .lock()
            .unwrap()
            .sectors
            .insert(name.to_string(), sectors);
    }

    pub fn mark_usb(&self, name: &str) {
        self.state.lock().unwrap().usb_drives.insert(name.to_string());
    }

    /// Queries issued so far, for verification.
    pub fn queries(&self) -> Vec<DeviceQuery> {
        self.state.lock().unwrap().queries.clone()
    }
}

impl Inventory for FakeInventory {
    fn list_devices(&self, query: &DeviceQuery) -> ScoutResult<Vec<DeviceRecord>> {
        let mut state = self.state.lock().unwrap();
        state.queries.push(query.clone());
        let records = state
            .records
            .iter()
            .filter(|rec| match &query.parent {
                // The fake does not model major numbers; parent scoping is
                // what engine tests rely on.
                Some(parent) => {
                    rec.name == *parent || devname::decompose(&rec.name).root == *parent
                }
                None => true,
            })
            .cloned()
            .collect();
        Ok(records)
    }

    fn raw_sector_count(&self, name: &str) -> Option<u64> {
        self.state.lock().unwrap().sectors.get(name).copied()
    }

    fn on_usb_bus(&self, name: &str) -> bool {
        self.state.lock().unwrap().usb_drives.contains(name)
    }

    fn ensure_block_device(&self, name: &str) -> ScoutResult<()> {
        let state = self.state.lock().unwrap();
        if state.records.iter().any(|r| r.name == name) {
            Ok(())
        } else {
            Err(ScoutError::DeviceNotFound(name.to_string()))
        }
    }
}
