//! Helpers related to block devices in sysfs.

use std::fs;
use std::path::{Path, PathBuf};

const SYS_CLASS_BLOCK: &str = "/sys/class/block";

/// Reads the raw sector count from `/sys/class/block/<dev>/size`.
///
/// The `size` file is expressed in 512-byte sectors. This is the quantity
/// the minimum-size filter compares against; it is sourced independently of
/// the display size reported by the inventory listing.
pub fn raw_sector_count(name: &str) -> Option<u64> {
    raw_sector_count_in(Path::new(SYS_CLASS_BLOCK), name)
}

pub fn raw_sector_count_in(sys_block_root: &Path, name: &str) -> Option<u64> {
    let content = fs::read_to_string(sys_block_root.join(name).join("size")).ok()?;
    content.trim().parse().ok()
}

/// Whether the device's resolved sysfs path traverses a USB bus.
///
/// `/sys/class/block/<dev>` is a symlink into the device tree; USB-attached
/// drives resolve through a `.../usbN/...` segment. Rotational and
/// removable flags are unreliable for such media, so callers force
/// removable on a match.
pub fn on_usb_bus(name: &str) -> bool {
    on_usb_bus_in(Path::new(SYS_CLASS_BLOCK), name)
}

pub fn on_usb_bus_in(sys_block_root: &Path, name: &str) -> bool {
    let link: PathBuf = sys_block_root.join(name);
    let resolved = match fs::canonicalize(&link) {
        Ok(p) => p,
        Err(_) => return false,
    };
    resolved.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|s| s.starts_with("usb") && s[3..].chars().all(|c| c.is_ascii_digit()))
    })
}
