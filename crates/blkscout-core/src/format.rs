//! Tabular output rendering.
//!
//! Two layouts: aligned fixed-width columns, sized from the widest observed
//! value per column, or tab-delimited rows for script consumption. Labels
//! render verbatim; no escaping is applied.

use crate::config::Config;
use crate::engine::{DriveEntry, PartitionEntry};

const PARTITION_HEADER: &[&str] = &["NAME", "SIZE", "FSTYPE", "LABEL"];
const PARTITION_HEADER_FULL: &[&str] = &["NAME", "SIZE", "FSTYPE", "TYPE", "UUID", "LABEL"];
const DRIVE_HEADER: &[&str] = &["NAME", "SIZE", "MODEL"];
const DRIVE_HEADER_FULL: &[&str] = &["NAME", "SIZE", "ROTA", "RM", "PARTS", "MODEL", "LABELS"];

pub fn render_partitions(entries: &[PartitionEntry], cfg: &Config) -> String {
    let header = if cfg.full_fields {
        PARTITION_HEADER_FULL
    } else {
        PARTITION_HEADER
    };
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let mut row = vec![
                device_cell(&e.record.name, cfg),
                format_size(e.record.size_bytes),
                e.fs_display.clone(),
            ];
            if cfg.full_fields {
                row.push(e.role.as_str().to_string());
                row.push(e.record.uuid.clone().unwrap_or_default());
            }
            row.push(e.record.label.clone().unwrap_or_default());
            row
        })
        .collect();
    render_table(header, &rows, cfg)
}

pub fn render_drives(entries: &[DriveEntry], cfg: &Config) -> String {
    let header = if cfg.full_fields {
        DRIVE_HEADER_FULL
    } else {
        DRIVE_HEADER
    };
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let mut row = vec![
                device_cell(&e.record.name, cfg),
                format_size(e.record.size_bytes),
            ];
            if cfg.full_fields {
                row.push(tri_state(e.rotational));
                row.push(if e.removable { "1" } else { "0" }.to_string());
                row.push(e.partition_count.to_string());
            }
            row.push(e.record.model.clone().unwrap_or_default());
            if cfg.full_fields {
                row.push(quoted_labels(&e.labels));
            }
            row
        })
        .collect();
    render_table(header, &rows, cfg)
}

fn device_cell(name: &str, cfg: &Config) -> String {
    if cfg.dev_prefixed {
        format!("/dev/{name}")
    } else {
        name.to_string()
    }
}

fn tri_state(v: Option<bool>) -> String {
    match v {
        Some(true) => "1".to_string(),
        Some(false) => "0".to_string(),
        None => "?".to_string(),
    }
}

/// Space-joined, individually double-quoted label list. Label content is
/// preserved verbatim, quotes included.
fn quoted_labels(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| format!("\"{l}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_table(header: &[&str], rows: &[Vec<String>], cfg: &Config) -> String {
    let mut out = String::new();
    if cfg.tab_delimited {
        if cfg.show_header {
            out.push_str(&header.join("\t"));
            out.push('\n');
        }
        for row in rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        return out;
    }

    // Column width is the widest printed value, header included when shown.
    let mut widths: Vec<usize> = if cfg.show_header {
        header.iter().map(|h| h.chars().count()).collect()
    } else {
        vec![0; header.len()]
    };
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    if cfg.show_header {
        push_aligned(&mut out, header.iter().map(|h| *h), &widths);
    }
    for row in rows {
        push_aligned(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_aligned<'c>(out: &mut String, cells: impl Iterator<Item = &'c str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[i].saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Human-readable size in binary units. Keeps more precision for small
/// magnitudes, whole numbers once three digits wide.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "K", "M", "G", "T", "P", "E"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else if size >= 100.0 {
        format!("{size:.0}{}", UNITS[unit])
    } else if size >= 10.0 {
        format!("{size:.1}{}", UNITS[unit])
    } else {
        format!("{size:.2}{}", UNITS[unit])
    }
}
