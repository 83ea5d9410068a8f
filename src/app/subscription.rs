// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Ticks only while something on screen is time-driven.
pub fn create_tick_subscription(is_animating: bool, has_notifications: bool) -> Subscription<Message> {
    if is_animating || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
