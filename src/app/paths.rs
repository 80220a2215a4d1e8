// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (config file, tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`STICKER_SMASH_CONFIG_DIR`, `STICKER_SMASH_DATA_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The gallery and download directories follow the same scheme, except that
//! their overrides come from the `[export]` config section.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "StickerSmash";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "STICKER_SMASH_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STICKER_SMASH_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Must be called before the first config load. A second call is ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application data directory path.
///
/// - Linux: `~/.local/share/StickerSmash/`
/// - macOS: `~/Library/Application Support/StickerSmash/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\StickerSmash\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_DATA_DIR) {
        return Some(path);
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application config directory path (holds `settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the gallery directory that plays the role of the device media library.
///
/// Defaults to `<Pictures>/StickerSmash`, falling back to `<data>/gallery`
/// on systems without a pictures directory.
pub fn get_gallery_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    dirs::picture_dir()
        .map(|mut path| {
            path.push(APP_NAME);
            path
        })
        .or_else(|| get_app_data_dir().map(|path| path.join("gallery")))
}

/// Returns the directory browser-style downloads are written to.
///
/// Defaults to the user's download directory, falling back to `<data>/downloads`.
pub fn get_download_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    dirs::download_dir().or_else(|| get_app_data_dir().map(|path| path.join("downloads")))
}

/// Returns the scratch directory view captures are written to before they
/// are moved into the gallery.
#[must_use]
pub fn get_capture_dir() -> PathBuf {
    std::env::temp_dir().join("sticker_smash-captures")
}
