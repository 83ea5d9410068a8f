// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`]: `Notification` and its `Severity`
//! - [`manager`]: queueing, expiry and dismissal
//! - [`toast`]: rendering
//!
//! Success and info toasts disappear after 3s, warnings after 5s; errors
//! stay until dismissed. At most three are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
