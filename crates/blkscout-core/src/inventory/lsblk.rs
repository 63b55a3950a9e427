//! Real inventory backend driving `lsblk`.
//!
//! One bounded external call per listing; output is requested in
//! `--pairs` form and parsed line by line. Lines that do not parse into a
//! usable record are skipped silently.

use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

use super::{sysfs, DeviceQuery, Inventory};
use crate::error::{ScoutError, ScoutResult};
use crate::record::DeviceRecord;

/// Fields requested from lsblk, matching `DeviceRecord`.
const LSBLK_FIELDS: &str = "NAME,SIZE,TYPE,ROTA,RM,FSTYPE,PARTTYPE,UUID,MODEL,LABEL";

const LSBLK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Default)]
pub struct LsblkInventory;

impl LsblkInventory {
    pub fn new() -> Self {
        Self
    }
}

impl Inventory for LsblkInventory {
    fn list_devices(&self, query: &DeviceQuery) -> ScoutResult<Vec<DeviceRecord>> {
        let mut cmd = Command::new("lsblk");
        // -b: sizes in bytes, -P: KEY="value" pairs (implies no header).
        cmd.args(["-bP", "-o", LSBLK_FIELDS]);
        if let Some(majors) = &query.majors {
            let list = majors
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(",");
            cmd.args(["-I", &list]);
        }
        if let Some(parent) = &query.parent {
            cmd.arg(format!("/dev/{parent}"));
        }

        let output = output_with_timeout("lsblk", &mut cmd, LSBLK_TIMEOUT)?;
        if !output.status.success() {
            return Err(output_failed("lsblk", &output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut records = Vec::new();
        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            let fields = split_pairs_line(line);
            match DeviceRecord::from_fields(&fields) {
                Some(rec) => records.push(rec),
                None => log::debug!("skipping unusable inventory line: {line}"),
            }
        }
        Ok(records)
    }

    fn raw_sector_count(&self, name: &str) -> Option<u64> {
        sysfs::raw_sector_count(name)
    }

    fn on_usb_bus(&self, name: &str) -> bool {
        sysfs::on_usb_bus(name)
    }

    fn ensure_block_device(&self, name: &str) -> ScoutResult<()> {
        let path = format!("/dev/{name}");
        let st = nix::sys::stat::stat(Path::new(&path))
            .map_err(|_| ScoutError::DeviceNotFound(name.to_string()))?;
        if st.st_mode & libc::S_IFMT != libc::S_IFBLK {
            return Err(ScoutError::DeviceNotFound(name.to_string()));
        }
        Ok(())
    }
}

/// Parse one `KEY="value"` pairs line. Values keep lsblk's `\xNN` escapes
/// decoded so labels with quotes come through verbatim.
fn split_pairs_line(line: &str) -> HashMap<String, String> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = REGEX
        .get_or_init(|| Regex::new(r#"([A-Z:_-]+)="((?:\\.|[^"\\])*)""#).unwrap());
    let mut fields = HashMap::new();
    for cap in regex.captures_iter(line) {
        fields.insert(cap[1].to_string(), unescape(&cap[2]));
    }
    fields
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(b) => out.push(b as char),
                    Err(_) => {
                        out.push_str("\\x");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn map_command_err(program: &str, err: std::io::Error) -> ScoutError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return ScoutError::CommandNotFound(program.to_string());
    }
    ScoutError::Io(err)
}

fn output_failed(program: &str, output: &Output) -> ScoutError {
    ScoutError::CommandFailed {
        program: program.to_string(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

fn output_with_timeout(program: &str, cmd: &mut Command, timeout: Duration) -> ScoutResult<Output> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = cmd.spawn().map_err(|e| map_command_err(program, e))?;

    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();

    // Drain pipes concurrently to avoid deadlocks on large output.
    let stdout_handle = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut out) = stdout.take() {
            use std::io::Read;
            let _ = out.read_to_end(&mut buf);
        }
        buf
    });
    let stderr_handle = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut err) = stderr.take() {
            use std::io::Read;
            let _ = err.read_to_end(&mut buf);
        }
        buf
    });

    let status = match child.wait_timeout(timeout).map_err(ScoutError::Io)? {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            let _ = stdout_handle.join();
            let _ = stderr_handle.join();
            return Err(ScoutError::CommandTimeout {
                program: program.to_string(),
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DeviceKind;

    #[test]
    fn splits_a_pairs_line() {
        let line = r#"NAME="sda1" SIZE="524288000" TYPE="part" ROTA="1" RM="0" FSTYPE="ext4" PARTTYPE="0x83" UUID="ab-cd" MODEL="" LABEL="root""#;
        let fields = split_pairs_line(line);
        assert_eq!(fields["NAME"], "sda1");
        assert_eq!(fields["PARTTYPE"], "0x83");
        assert_eq!(fields["MODEL"], "");

        let rec = DeviceRecord::from_fields(&fields).unwrap();
        assert_eq!(rec.kind, DeviceKind::Partition);
        assert_eq!(rec.size_bytes, 524_288_000);
    }

    #[test]
    fn decodes_hex_escapes_in_labels() {
        let line = r#"NAME="sdb1" SIZE="1" TYPE="part" LABEL="My \x22quoted\x22 disk""#;
        let fields = split_pairs_line(line);
        assert_eq!(fields["LABEL"], "My \"quoted\" disk");
    }

    #[test]
    fn unescape_passthrough() {
        assert_eq!(unescape("plain"), "plain");
        assert_eq!(unescape(r"tr\x20ue"), "tr ue");
        assert_eq!(unescape(r"dangling\"), "dangling\\");
    }

    #[test]
    fn garbage_lines_produce_no_records() {
        let fields = split_pairs_line("not a pairs line at all");
        assert!(DeviceRecord::from_fields(&fields).is_none());
    }
}
