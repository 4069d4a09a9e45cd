// SPDX-License-Identifier: MPL-2.0
use guest_gallery::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        assets_dir: args.opt_value_from_str("--assets-dir").unwrap(),
        config_path: args.opt_value_from_str("--config").unwrap(),
    };

    app::run(flags)
}
