use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use ymo_format::LoadReport;

use super::table_loader::{fail, load_table};

pub struct CheckArgs {
    pub table_path: PathBuf,
    pub strict: bool,
}

pub fn run(args: CheckArgs) {
    let report = match load_table(&args.table_path) {
        Ok((_, report)) => report,
        Err(e) => fail(e),
    };

    print!("{}", summary(&args.table_path, &report));

    if args.strict && !report.is_clean() {
        std::process::exit(1);
    }
}

/// One summary line, followed by a warning line per rejected entry.
pub fn summary(path: &Path, report: &LoadReport) -> String {
    let mut out = String::new();
    write!(
        out,
        "{}: {} of {} entries loaded, {} rejected",
        path.display(),
        report.loaded,
        report.declared,
        report.rejected.len()
    )
    .unwrap();
    if report.duplicates > 0 {
        write!(out, ", {} replaced", report.duplicates).unwrap();
    }
    writeln!(out, " (header {})", report.header).unwrap();

    for r in &report.rejected {
        writeln!(
            out,
            "warning: entry {} (#{:08x} @{}): {}",
            r.index, r.entry.hash, r.entry.offset, r.reason
        )
        .unwrap();
    }
    out
}
