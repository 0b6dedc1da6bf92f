use std::path::PathBuf;

use ymo_core::Colors;
use ymo_format::dump;

use super::table_loader::{fail, load_table};

pub struct DumpArgs {
    pub table_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let (table, report) = match load_table(&args.table_path) {
        Ok(loaded) => loaded,
        Err(e) => fail(e),
    };
    let colors = Colors::new(args.color);
    print!("{}", dump(&table, &report, colors));
}
