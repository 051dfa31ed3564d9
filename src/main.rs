// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: iced_reel [--url <URL>] [--title <TEXT>] [--duration <SECS>] [--config-dir <DIR>]

Options:
  --url <URL>          Media to play (defaults to the configured source)
  --title <TEXT>       Title shown in the overlay
  --duration <SECS>    Media length, when the engine cannot report it
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        url: args.opt_value_from_str("--url")?,
        title: args.opt_value_from_str("--title")?,
        duration_secs: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_os_str("--config-dir", |s| {
            Ok::<PathBuf, String>(PathBuf::from(s))
        })?,
    };

    let rest = args.finish();
    if let Some(arg) = rest.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", arg.to_string_lossy()),
        });
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
