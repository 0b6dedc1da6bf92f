//! Human-readable table dump for debugging translation resources.

use std::fmt::Write as _;

use ymo_core::Colors;

use super::loader::TranslationTable;
use super::report::LoadReport;

/// Generate a human-readable dump of a loaded table and its load report.
pub fn dump(table: &TranslationTable, report: &LoadReport, colors: Colors) -> String {
    let mut out = String::new();

    dump_header(&mut out, report, &colors);
    dump_entries(&mut out, table, &colors);
    dump_rejected(&mut out, report, &colors);

    out
}

fn dump_header(out: &mut String, report: &LoadReport, c: &Colors) {
    writeln!(out, "{}[header]{}", c.blue, c.reset).unwrap();
    writeln!(out, "size     = {}", report.size).unwrap();
    writeln!(out, "declared = {}", report.declared).unwrap();
    writeln!(out, "loaded   = {}", report.loaded).unwrap();
    writeln!(out, "rejected = {}", report.rejected.len()).unwrap();
    if report.duplicates > 0 {
        writeln!(out, "replaced = {}", report.duplicates).unwrap();
    }
    writeln!(out, "status   = {}", report.header).unwrap();
}

fn dump_entries(out: &mut String, table: &TranslationTable, c: &Colors) {
    if table.is_empty() {
        return;
    }
    out.push('\n');
    writeln!(out, "{}[entries]{}", c.blue, c.reset).unwrap();
    for (hash, text) in table.sorted_entries() {
        writeln!(out, "#{hash:08x} {}{text:?}{}", c.green, c.reset).unwrap();
    }
}

fn dump_rejected(out: &mut String, report: &LoadReport, c: &Colors) {
    if report.rejected.is_empty() {
        return;
    }
    let w = width_for_count(report.declared as usize);

    out.push('\n');
    writeln!(out, "{}[rejected]{}", c.blue, c.reset).unwrap();
    for r in &report.rejected {
        writeln!(
            out,
            "{}{:0w$}{} #{:08x} @{} {}{}{}",
            c.dim, r.index, c.reset, r.entry.hash, r.entry.offset, c.yellow, r.reason, c.reset
        )
        .unwrap();
    }
}

/// Digits needed to print indices below `count`.
fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}
