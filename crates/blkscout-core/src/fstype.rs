//! Filesystem-type display names.

/// Map a raw filesystem type to the simplified name shown to users.
/// Everything outside the small translation table passes through unchanged.
pub fn simplify(raw: &str) -> &str {
    match raw {
        "ntfs-3g" => "NTFS",
        "vfat" => "Fat32",
        "hfsplus" => "HPFS",
        other => other,
    }
}
