// SPDX-License-Identifier: MPL-2.0
use sticker_smash::app::{self, paths, Flags};
use sticker_smash::config::ExportMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
StickerSmash - put emoji stickers on your photos

USAGE:
  sticker_smash [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --export-mode <MODE>    auto, gallery or download

ARGS:
  <IMAGE>                 Photo to start editing right away

ENVIRONMENT:
  STICKER_SMASH_CONFIG_DIR   Config directory (overridden by --config-dir)
  STICKER_SMASH_DATA_DIR     Data directory
  RUST_LOG                   Log filter (default: sticker_smash=info)
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sticker_smash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring --lang");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring --config-dir");
            None
        });
    let export_mode: Option<ExportMode> =
        args.opt_value_from_str("--export-mode").unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring --export-mode");
            None
        });

    paths::init_cli_overrides(config_dir);

    let flags = Flags {
        lang,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        export_mode,
    };

    tracing::info!(?flags, "starting StickerSmash");
    app::run(flags)
}
