use std::io;
use thiserror::Error;

pub type ScoutResult<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("invalid major number list: {0}")]
    InvalidMajorList(String),

    #[error("unknown exclusion keyword: {0}")]
    UnknownExcludeKeyword(String),

    #[error("not a block device: {0}")]
    DeviceNotFound(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command failed: {program} (exit={code:?}): {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Command timed out: {program} after {timeout_secs}s")]
    CommandTimeout { program: String, timeout_secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("nix errno: {0}")]
    Nix(#[from] nix::errno::Errno),
}
