// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use iced_notify::ui::notifications::Anchor;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config");
        None
    });
    let anchor: Option<Anchor> = args.opt_value_from_str("--anchor").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --anchor");
        None
    });

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "unused arguments");
    }

    app::run(Flags { config_path, anchor })
}
