//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap.
//! `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::hash::HashArgs;
use crate::commands::lookup::LookupArgs;
use crate::commands::settings::SettingsArgs;

pub struct DumpParams {
    pub table_path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            table_path: p.table_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub table_path: PathBuf,
    pub strict: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            strict: m.get_flag("strict"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            table_path: p.table_path,
            strict: p.strict,
        }
    }
}

pub struct LookupParams {
    pub table_path: PathBuf,
    pub text: String,
    pub context: Option<String>,
}

impl LookupParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            text: text(m),
            context: m.get_one::<String>("context").cloned(),
        }
    }
}

impl From<LookupParams> for LookupArgs {
    fn from(p: LookupParams) -> Self {
        Self {
            table_path: p.table_path,
            text: p.text,
            context: p.context,
        }
    }
}

pub struct HashParams {
    pub text: String,
    pub context: Option<String>,
}

impl HashParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            text: text(m),
            context: m.get_one::<String>("context").cloned(),
        }
    }
}

impl From<HashParams> for HashArgs {
    fn from(p: HashParams) -> Self {
        Self {
            text: p.text,
            context: p.context,
        }
    }
}

pub struct SettingsParams {
    pub appdata: Option<PathBuf>,
    pub exe_dir: Option<PathBuf>,
    pub path_only: bool,
}

impl SettingsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            appdata: m.get_one::<PathBuf>("appdata").cloned(),
            exe_dir: m.get_one::<PathBuf>("exe_dir").cloned(),
            path_only: m.get_flag("path_only"),
        }
    }
}

impl From<SettingsParams> for SettingsArgs {
    fn from(p: SettingsParams) -> Self {
        Self {
            appdata: p.appdata,
            exe_dir: p.exe_dir,
            path_only: p.path_only,
        }
    }
}

// Required positionals; clap rejects the command line before dispatch when missing.
fn table_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("table_path")
        .cloned()
        .unwrap_or_default()
}

fn text(m: &ArgMatches) -> String {
    m.get_one::<String>("text").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
