mod cli;
mod commands;
mod logging;

use cli::{CheckParams, DumpParams, HashParams, LookupParams, SettingsParams, build_cli};

fn main() {
    logging::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("lookup", m)) => {
            let params = LookupParams::from_matches(m);
            commands::lookup::run(params.into());
        }
        Some(("hash", m)) => {
            let params = HashParams::from_matches(m);
            commands::hash::run(params.into());
        }
        Some(("settings", m)) => {
            let params = SettingsParams::from_matches(m);
            commands::settings::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
