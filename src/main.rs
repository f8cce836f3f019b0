// SPDX-License-Identifier: MPL-2.0
use astrofolio::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("astrofolio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        content: args.opt_value_from_str("--content").unwrap_or_default(),
        assets: args.opt_value_from_str("--assets").unwrap_or_default(),
        reduced_motion: args.contains("--reduced-motion"),
        no_video: args.contains("--no-video"),
    };

    app::run(flags)
}
