//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ymo")
        .about("Inspect YMO translation tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(check_command())
        .subcommand(lookup_command())
        .subcommand(hash_command())
        .subcommand(settings_command())
}

/// Print every entry of a table along with rejected records.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the decoded contents of a table")
        .after_help(
            r#"EXAMPLES:
  ymo dump fr.ymo
  ymo dump fr.ymo --color never"#,
        )
        .arg(table_path_arg())
        .arg(color_arg())
}

/// Summarize a table and optionally fail on damage.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a table")
        .after_help(
            r#"EXAMPLES:
  ymo check fr.ymo
  ymo check fr.ymo --strict    # exit 1 if any entry was dropped"#,
        )
        .arg(table_path_arg())
        .arg(strict_arg())
}

/// Translate one string through a table.
pub fn lookup_command() -> Command {
    Command::new("lookup")
        .about("Translate a string using a table")
        .after_help(
            r#"EXAMPLES:
  ymo lookup fr.ymo "Cancel"
  ymo lookup fr.ymo "Open" -c menu"#,
        )
        .arg(table_path_arg())
        .arg(text_arg())
        .arg(context_arg())
}

/// Print the key hash of a string.
pub fn hash_command() -> Command {
    Command::new("hash")
        .about("Print the table key hash of a string")
        .after_help(
            r#"EXAMPLES:
  ymo hash "OK"                 # 0xfbebb8b9
  ymo hash "Open" -c menu"#,
        )
        .arg(text_arg())
        .arg(context_arg())
}

/// Show the settings file that would be loaded.
pub fn settings_command() -> Command {
    Command::new("settings")
        .about("Show the application settings")
        .arg(appdata_arg())
        .arg(exe_dir_arg())
        .arg(path_only_arg())
}
