// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations are embedded from `assets/i18n/`; an extra directory can be
//! supplied with `--i18n-dir`. The locale is picked from the CLI, then the
//! config file, then the OS, falling back to `en-US`.

pub mod fluent;
