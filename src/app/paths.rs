// SPDX-License-Identifier: MPL-2.0
//! Location of the directory holding `settings.toml`.
//!
//! Candidates are tried in order, the first one present wins:
//!
//! 1. an explicit path handed to [`config_dir_with_override`] (tests)
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`]
//! 3. the `GALLERY_ADMIN_CONFIG_DIR` environment variable, when not blank
//! 4. `<platform config dir>/GalleryAdmin` from the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "GalleryAdmin";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GALLERY_ADMIN_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. Only the first call has any effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

/// Config directory resolved from the CLI, environment and platform.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    resolve(override_path.or(cli), |name| std::env::var(name).ok())
}

fn resolve(explicit: Option<PathBuf>, env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    explicit
        .or_else(|| {
            env(ENV_CONFIG_DIR)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_NAME)))
}
