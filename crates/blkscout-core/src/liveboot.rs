//! Live-boot descriptor.
//!
//! Live installer media drop a small `KEY=value` file describing the boot
//! session; the only field we consume is `BOOT_UUID`. A missing or
//! unreadable descriptor simply means no boot partition can be matched.

use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_DESCRIPTOR_PATH: &str = "/etc/live-boot.conf";

/// Environment override for the descriptor location, mainly for tests and
/// unusual live images.
pub const DESCRIPTOR_PATH_ENV: &str = "BLKSCOUT_LIVE_BOOT_FILE";

/// Read the boot UUID from the default (or overridden) descriptor file.
pub fn boot_uuid() -> Option<String> {
    let path = env::var(DESCRIPTOR_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_DESCRIPTOR_PATH.to_string());
    boot_uuid_from(Path::new(&path))
}

/// Scan a descriptor file for a `BOOT_UUID=` assignment.
pub fn boot_uuid_from(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("BOOT_UUID=") {
            let value = value.trim().trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_boot_uuid() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("live-boot.conf");
        fs::write(&file, "BOOT_MODE=iso\nBOOT_UUID=1234-ABCD\n").unwrap();
        assert_eq!(boot_uuid_from(&file).as_deref(), Some("1234-ABCD"));
    }

    #[test]
    fn strips_quotes() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("live-boot.conf");
        fs::write(&file, "BOOT_UUID=\"1234-ABCD\"\n").unwrap();
        assert_eq!(boot_uuid_from(&file).as_deref(), Some("1234-ABCD"));
    }

    #[test]
    fn missing_file_or_field_is_none() {
        let tmp = tempdir().unwrap();
        assert!(boot_uuid_from(&tmp.path().join("nope")).is_none());

        let file = tmp.path().join("empty.conf");
        fs::write(&file, "BOOT_MODE=iso\n").unwrap();
        assert!(boot_uuid_from(&file).is_none());
    }
}
