// SPDX-License-Identifier: MPL-2.0
use ephemerides::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Ephemerides: today's historical fact

USAGE:
  ephemerides [OPTIONS]

OPTIONS:
  --lang <code>        Display language (ca, es, en)
  --api-url <url>      Backend base URL (default http://127.0.0.1:5000)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  EPHEMERIDES_API_URL     Backend base URL
  EPHEMERIDES_CONFIG_DIR  Directory holding settings.toml
  RUST_LOG                Log filter (default: info,ephemerides=debug)
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ephemerides=debug".into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    let startup = match app::prepare(&flags) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(error = %err, "cannot start");
            std::process::exit(1);
        }
    };
    app::run(startup)
}
