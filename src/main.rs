// SPDX-License-Identifier: MPL-2.0
use gallery_admin::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "gallery_admin=info";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: optional_arg(&mut args, "--lang"),
        i18n_dir: optional_arg(&mut args, "--i18n-dir"),
        config_dir: optional_arg(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(key, error = %err, "invalid command-line value");
        None
    })
}
