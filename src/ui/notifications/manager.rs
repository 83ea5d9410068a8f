// SPDX-License-Identifier: MPL-2.0
//! Notification queueing, expiry and dismissal.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "error notification"
            ),
            Severity::Warning => tracing::info!(
                key = notification.message_key(),
                "warning notification"
            ),
            Severity::Success | Severity::Info => tracing::debug!(
                key = notification.message_key(),
                "notification"
            ),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose timer ran out by `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick_at(Instant::now()),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops every notification, visible or queued, with the given key.
    ///
    /// Used to retire stale list errors once a fetch succeeds.
    pub fn clear_key(&mut self, message_key: &str) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| n.message_key() != message_key);
        self.queue.retain(|n| n.message_key() != message_key);

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}
