// SPDX-License-Identifier: MPL-2.0
use snack_bar::app::{self, Flags};

const USAGE: &str = "\
Usage: snack_bar [OPTIONS]

Options:
  --config <PATH>     Load the style from PATH instead of the default location
  --action <TITLE>    Add an action button
  --icon <KIND>       success, error or none
  --long              Use the long display duration
  --variant <NAME>    default or app
  -h, --help          Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_path: args.opt_value_from_os_str("--config", |value| {
            Ok::<_, std::convert::Infallible>(value.into())
        })?,
        action: args.opt_value_from_str("--action")?,
        icon: args.opt_value_from_str("--icon")?.unwrap_or_default(),
        long: args.contains("--long"),
        variant: args.opt_value_from_str("--variant")?.unwrap_or_default(),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            println!("{USAGE}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}
