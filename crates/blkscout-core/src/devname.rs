//! Device-name decomposition.
//!
//! Splits a bare device-node name like `sda1` or `mmcblk0p3` into the root
//! drive name and an optional trailing partition number.

/// Result of decomposing a device name. The partition number is kept as the
/// original digit string so callers can echo it back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceName {
    pub root: String,
    pub partition: Option<String>,
}

impl DeviceName {
    pub fn is_partition(&self) -> bool {
        self.partition.is_some()
    }
}

/// Split `name` into (root drive, partition number). Total: never fails.
///
/// MMC cards name partitions `mmcblk<N>p<M>`; everything else carries the
/// partition number as up to two trailing decimal digits (`hda1`, `sda12`).
/// A name without a trailing number is a root on its own, including `mmcblk0`.
pub fn decompose(name: &str) -> DeviceName {
    if let Some(split) = split_mmc(name) {
        return split;
    }

    let digits = name.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    let take = digits.min(2);
    if take == 0 {
        return DeviceName {
            root: name.to_string(),
            partition: None,
        };
    }
    let cut = name.len() - take;
    DeviceName {
        root: name[..cut].to_string(),
        partition: Some(name[cut..].to_string()),
    }
}

fn split_mmc(name: &str) -> Option<DeviceName> {
    let rest = name.strip_prefix("mmcblk")?;
    let card: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if card.is_empty() {
        return None;
    }
    let tail = &rest[card.len()..];
    if tail.is_empty() {
        // Bare card name; the trailing card number is not a partition.
        return Some(DeviceName {
            root: name.to_string(),
            partition: None,
        });
    }
    let part = tail.strip_prefix('p')?;
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(DeviceName {
        root: format!("mmcblk{card}"),
        partition: Some(part.to_string()),
    })
}
