// SPDX-License-Identifier: MPL-2.0
use vernissage::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        webhook_url: args.opt_value_from_str("--webhook-url").unwrap_or(None),
    };

    app::run(flags)
}
