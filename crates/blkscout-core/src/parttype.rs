//! Partition-type classification.
//!
//! Maps raw partition-type identifiers (legacy MBR hex codes and GPT type
//! GUIDs) onto a fixed taxonomy of semantic roles. Matching is
//! case-insensitive; the table is exact and deliberately small.

/// GPT type GUIDs (canonical lowercase form).
const GUID_EFI_SYSTEM: &str = "c12a7328-f81f-11d2-ba4b-00a0c93ec93b";
const GUID_MSFT_RESERVED: &str = "e3c9e316-0b5c-4db8-817d-f92df00215ae";
const GUID_WIN_RECOVERY: &str = "de94bba4-06d1-4d40-a16a-bfd50179d6ac";
const GUID_LINUX_DATA: &str = "0fc63daf-8483-4772-8e79-3d69d8477de4";
const GUID_LINUX_SWAP: &str = "0657fd6d-a4ab-43c4-84e5-0933c84b4f4f";
const GUID_LINUX_HOME: &str = "933ac7e1-2eb4-4f13-b844-0e14e2aef915";
const GUID_LINUX_ROOT_X86: &str = "44479540-f297-41b2-9af7-d131d5f0458a";
const GUID_LINUX_ROOT_X86_64: &str = "4f68bce3-e8cd-4db1-96e7-fbcaf984b709";
const GUID_BASIC_DATA: &str = "ebd0a0a2-b9e5-4433-87c0-68b6b72699c7";

/// Semantic role of a partition, derived from its type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionRole {
    /// MBR extended boot record container; never a usable target.
    ExtendedBootRecord,
    /// Legacy MBR EFI/reserved family (0xc, 0x27, 0xef).
    EfiReserved,
    EfiSystem,
    MicrosoftReserved,
    WindowsRecovery,
    LinuxData,
    LinuxSwap,
    LinuxHome,
    LinuxRoot,
    /// Untyped or Windows basic data; cannot be told apart from lsblk output.
    Ambiguous,
    Other,
}

impl PartitionRole {
    /// Roles suppressed by the EFI/reserved exclusion option.
    pub fn is_efi_or_reserved(self) -> bool {
        matches!(
            self,
            PartitionRole::EfiReserved
                | PartitionRole::EfiSystem
                | PartitionRole::MicrosoftReserved
                | PartitionRole::WindowsRecovery
        )
    }

    /// Roles that carry a Linux filesystem or swap area.
    pub fn is_linux(self) -> bool {
        matches!(
            self,
            PartitionRole::LinuxData
                | PartitionRole::LinuxSwap
                | PartitionRole::LinuxHome
                | PartitionRole::LinuxRoot
        )
    }

    /// Roles accepted when locating a drive's EFI system partition. The
    /// legacy MBR family counts: firmware will boot either.
    pub fn is_esp(self) -> bool {
        matches!(self, PartitionRole::EfiSystem | PartitionRole::EfiReserved)
    }

    /// Short display name used by the full partition layout.
    pub fn as_str(self) -> &'static str {
        match self {
            PartitionRole::ExtendedBootRecord => "extended",
            PartitionRole::EfiReserved => "efi-reserved",
            PartitionRole::EfiSystem => "efi-system",
            PartitionRole::MicrosoftReserved => "msft-reserved",
            PartitionRole::WindowsRecovery => "win-recovery",
            PartitionRole::LinuxData => "linux-data",
            PartitionRole::LinuxSwap => "linux-swap",
            PartitionRole::LinuxHome => "linux-home",
            PartitionRole::LinuxRoot => "linux-root",
            PartitionRole::Ambiguous => "data",
            PartitionRole::Other => "other",
        }
    }
}

/// Classify a raw partition-type identifier. An empty identifier is
/// ambiguous (untyped), not an error.
pub fn classify(part_type_id: &str) -> PartitionRole {
    let id = part_type_id.trim().to_ascii_lowercase();
    match id.as_str() {
        "" | GUID_BASIC_DATA => PartitionRole::Ambiguous,
        "0xf" => PartitionRole::ExtendedBootRecord,
        "0xc" | "0x27" | "0xef" => PartitionRole::EfiReserved,
        GUID_EFI_SYSTEM => PartitionRole::EfiSystem,
        GUID_MSFT_RESERVED => PartitionRole::MicrosoftReserved,
        GUID_WIN_RECOVERY => PartitionRole::WindowsRecovery,
        "0x83" | GUID_LINUX_DATA => PartitionRole::LinuxData,
        "0x82" | GUID_LINUX_SWAP => PartitionRole::LinuxSwap,
        GUID_LINUX_HOME => PartitionRole::LinuxHome,
        GUID_LINUX_ROOT_X86 | GUID_LINUX_ROOT_X86_64 => PartitionRole::LinuxRoot,
        _ => PartitionRole::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbr_codes() {
        assert_eq!(classify("0xf"), PartitionRole::ExtendedBootRecord);
        assert_eq!(classify("0xF"), PartitionRole::ExtendedBootRecord);
        assert_eq!(classify("0xc"), PartitionRole::EfiReserved);
        assert_eq!(classify("0x27"), PartitionRole::EfiReserved);
        assert_eq!(classify("0xef"), PartitionRole::EfiReserved);
        assert_eq!(classify("0xEF"), PartitionRole::EfiReserved);
        assert_eq!(classify("0x83"), PartitionRole::LinuxData);
        assert_eq!(classify("0x82"), PartitionRole::LinuxSwap);
    }

    #[test]
    fn gpt_guids_case_insensitive() {
        assert_eq!(
            classify("c12a7328-f81f-11d2-ba4b-00a0c93ec93b"),
            PartitionRole::EfiSystem
        );
        assert_eq!(
            classify("C12A7328-F81F-11D2-BA4B-00A0C93EC93B"),
            PartitionRole::EfiSystem
        );
        assert_eq!(
            classify("e3c9e316-0b5c-4db8-817d-f92df00215ae"),
            PartitionRole::MicrosoftReserved
        );
        assert_eq!(
            classify("de94bba4-06d1-4d40-a16a-bfd50179d6ac"),
            PartitionRole::WindowsRecovery
        );
        assert_eq!(
            classify("0fc63daf-8483-4772-8e79-3d69d8477de4"),
            PartitionRole::LinuxData
        );
        assert_eq!(
            classify("0657fd6d-a4ab-43c4-84e5-0933c84b4f4f"),
            PartitionRole::LinuxSwap
        );
        assert_eq!(
            classify("933ac7e1-2eb4-4f13-b844-0e14e2aef915"),
            PartitionRole::LinuxHome
        );
        assert_eq!(
            classify("44479540-f297-41b2-9af7-d131d5f0458a"),
            PartitionRole::LinuxRoot
        );
        assert_eq!(
            classify("4f68bce3-e8cd-4db1-96e7-fbcaf984b709"),
            PartitionRole::LinuxRoot
        );
    }

    #[test]
    fn ambiguous_and_other() {
        assert_eq!(classify(""), PartitionRole::Ambiguous);
        assert_eq!(
            classify("ebd0a0a2-b9e5-4433-87c0-68b6b72699c7"),
            PartitionRole::Ambiguous
        );
        assert_eq!(classify("0x07"), PartitionRole::Other);
        assert_eq!(
            classify("21686148-6449-6e6f-744e-656564454649"),
            PartitionRole::Other
        );
    }

    #[test]
    fn linux_predicate() {
        assert!(classify("0x83").is_linux());
        assert!(classify("933ac7e1-2eb4-4f13-b844-0e14e2aef915").is_linux());
        assert!(!classify("").is_linux());
        assert!(!classify("0xef").is_linux());
    }
}
