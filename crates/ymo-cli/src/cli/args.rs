//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Translation table file (positional).
pub fn table_path_arg() -> Arg {
    Arg::new("table_path")
        .value_name("TABLE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Translation table file (.ymo)")
}

/// Source text to translate or hash (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("Source text")
}

/// Disambiguation context (-c/--context).
pub fn context_arg() -> Arg {
    Arg::new("context")
        .short('c')
        .long("context")
        .value_name("CTX")
        .help("Disambiguation context")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Fail on any rejected entry (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Exit with an error if the table is not clean")
}

/// Override the per-user data directory (--appdata).
pub fn appdata_arg() -> Arg {
    Arg::new("appdata")
        .long("appdata")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Per-user data directory (default: $APPDATA)")
}

/// Override the executable directory (--exe-dir).
pub fn exe_dir_arg() -> Arg {
    Arg::new("exe_dir")
        .long("exe-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory holding the legacy settings file (default: next to this binary)")
}

/// Print the resolved path only (--path).
pub fn path_only_arg() -> Arg {
    Arg::new("path_only")
        .long("path")
        .action(ArgAction::SetTrue)
        .help("Print the settings file path instead of its contents")
}
