// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{run, Flags};

fn main() -> iced::Result {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=iced_lightbox=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    run(flags)
}
