mod cli;
mod commands;

use cli::{CaptureParams, PatternParams, build_cli};

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("pattern", m)) => {
            let params = PatternParams::from_matches(m);
            commands::pattern::run(params.into());
        }
        Some(("capture", m)) => {
            let params = CaptureParams::from_matches(m);
            commands::capture::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
