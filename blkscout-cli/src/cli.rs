use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blkscout",
    version,
    about = "List drives and partitions relevant to OS installation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Drive to list partitions of (bare name, e.g. `sda`)
    pub device: Option<String>,

    /// Prefix device names with /dev/
    #[arg(short = 'd', long = "dev-output", global = true)]
    pub dev_output: bool,

    /// Comma-separated exclusions: boot, efi, swap, all
    #[arg(short = 'e', long = "exclude", value_name = "LIST", global = true)]
    pub exclude: Option<String>,

    /// Show all fields
    #[arg(short = 'f', long = "full", global = true)]
    pub full: bool,

    /// Only report devices strictly larger than this many megabytes
    #[arg(short = 'm', long = "min-size", value_name = "MB", global = true)]
    pub min_size: Option<u64>,

    /// Comma-separated device major numbers to consider
    #[arg(short = 'M', long = "major-num", value_name = "LIST", global = true)]
    pub major_num: Option<String>,

    /// Omit the header line
    #[arg(short = 'n', long = "noheadings", global = true)]
    pub noheadings: bool,

    /// Show raw filesystem type names
    #[arg(short = 'r', long = "raw", global = true, conflicts_with = "simplify")]
    pub raw: bool,

    /// Simplify filesystem type names (NTFS, Fat32, HPFS)
    #[arg(short = 's', long = "simplify", global = true)]
    pub simplify: bool,

    /// Tab-delimited output instead of aligned columns
    #[arg(short = 't', long = "tabs", global = true)]
    pub tabs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List partitions of every considered drive
    All,
    /// List drives
    Drives,
    /// List swap partitions
    Swap,
    /// Exit 0 if the partition carries a Linux partition type, 1 otherwise
    IsLinux { device: String },
    /// Split a device name into root drive and partition number
    SplitDevice { device: String },
    /// Print the EFI system partition of a drive, if any
    FindEsp { device: String },
}
