//! Invocation configuration.
//!
//! Built once by the command surface and handed to the engine read-only.
//! Option parsing failures surface here as configuration errors before any
//! inventory query runs.

use std::collections::BTreeSet;

use crate::error::{ScoutError, ScoutResult};

/// Major device numbers considered by default: IDE (3, 22), the SCSI disk
/// ranges (8, 65-68), MMC (179) and NVMe/blkext (259).
pub const DEFAULT_MAJOR_NUMBERS: &[u32] = &[3, 8, 22, 65, 66, 67, 68, 179, 259];

#[derive(Debug, Clone)]
pub struct Config {
    pub major_numbers: BTreeSet<u32>,
    pub exclude_boot: bool,
    pub exclude_efi: bool,
    pub exclude_swap: bool,
    /// Minimum admitted size in whole megabytes, compared strictly against
    /// the sysfs sector-derived size (never the display size).
    pub min_size_mb: Option<u64>,
    pub show_header: bool,
    pub tab_delimited: bool,
    pub dev_prefixed: bool,
    pub full_fields: bool,
    pub simplify_fs_names: bool,
    /// UUID of the running live-boot partition, resolved by the command
    /// surface only when `exclude_boot` is set.
    pub live_boot_uuid: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            major_numbers: DEFAULT_MAJOR_NUMBERS.iter().copied().collect(),
            exclude_boot: false,
            exclude_efi: false,
            exclude_swap: false,
            min_size_mb: None,
            show_header: true,
            tab_delimited: false,
            dev_prefixed: false,
            full_fields: false,
            // Off by default; raw lsblk names unless explicitly simplified.
            simplify_fs_names: false,
            live_boot_uuid: None,
        }
    }
}

impl Config {
    /// Parse a comma-separated major-number list. Every entry must be a
    /// positive integer; anything else is a fatal configuration error.
    pub fn parse_major_numbers(list: &str) -> ScoutResult<BTreeSet<u32>> {
        let mut majors = BTreeSet::new();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let n: u32 = token
                .parse()
                .map_err(|_| ScoutError::InvalidMajorList(list.to_string()))?;
            if n == 0 {
                return Err(ScoutError::InvalidMajorList(list.to_string()));
            }
            majors.insert(n);
        }
        if majors.is_empty() {
            return Err(ScoutError::InvalidMajorList(list.to_string()));
        }
        Ok(majors)
    }

    /// Apply a comma-separated exclusion list (`boot`, `efi`, `swap`, with
    /// `all` as sugar for all three).
    pub fn apply_exclusions(&mut self, list: &str) -> ScoutResult<()> {
        for keyword in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match keyword {
                "boot" => self.exclude_boot = true,
                "efi" => self.exclude_efi = true,
                "swap" => self.exclude_swap = true,
                "all" => {
                    self.exclude_boot = true;
                    self.exclude_efi = true;
                    self.exclude_swap = true;
                }
                other => return Err(ScoutError::UnknownExcludeKeyword(other.to_string())),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_list() {
        let majors = Config::parse_major_numbers("8,179").unwrap();
        assert!(majors.contains(&8) && majors.contains(&179));
        assert_eq!(majors.len(), 2);
    }

    #[test]
    fn rejects_bad_major_lists() {
        assert!(Config::parse_major_numbers("8,abc").is_err());
        assert!(Config::parse_major_numbers("0").is_err());
        assert!(Config::parse_major_numbers("-8").is_err());
        assert!(Config::parse_major_numbers("").is_err());
    }

    #[test]
    fn exclusion_keywords() {
        let mut cfg = Config::default();
        cfg.apply_exclusions("boot,swap").unwrap();
        assert!(cfg.exclude_boot && cfg.exclude_swap && !cfg.exclude_efi);

        let mut cfg = Config::default();
        cfg.apply_exclusions("all").unwrap();
        assert!(cfg.exclude_boot && cfg.exclude_efi && cfg.exclude_swap);

        let mut cfg = Config::default();
        assert!(cfg.apply_exclusions("bogus").is_err());
    }

    #[test]
    fn defaults_are_permissive() {
        let cfg = Config::default();
        assert!(!cfg.exclude_boot && !cfg.exclude_efi && !cfg.exclude_swap);
        assert!(cfg.show_header);
        assert!(!cfg.simplify_fs_names);
        assert!(cfg.major_numbers.contains(&8));
    }
}
