// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery_panel;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(gallery_panel::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast expiry and the refresh spinner.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_ADMIN_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
