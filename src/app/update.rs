// SPDX-License-Identifier: MPL-2.0
//! Turns panel effects into runtime tasks and toast updates.

use super::Message;
use crate::application::operation;
use crate::application::port::GalleryStore;
use crate::infrastructure::rest::thumbnail;
use crate::ui::gallery_panel::{self, Effect, GalleryPanel};
use crate::ui::notifications;
use iced::Task;
use std::sync::Arc;

/// Mutable application state touched while handling a message.
pub struct UpdateContext<'a> {
    pub panel: &'a mut GalleryPanel,
    pub notifications: &'a mut notifications::Manager,
    pub store: &'a Arc<dyn GalleryStore>,
}

pub fn handle_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_panel::Message,
) -> Task<Message> {
    let effects = ctx.panel.update(message);
    apply_effects(ctx, effects)
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications
        .handle_message(&notifications::NotificationMessage::Tick);
    handle_panel_message(ctx, gallery_panel::Message::Tick)
}

/// Remote operations and thumbnail downloads become tasks; toast effects
/// are applied immediately.
pub fn apply_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| match effect {
            Effect::Run(op) => {
                let store = Arc::clone(ctx.store);
                Task::perform(operation::execute(store, op), |completion| {
                    Message::Panel(gallery_panel::Message::Completed(completion))
                })
            }
            Effect::Notify(notification) => {
                ctx.notifications.push(notification);
                Task::none()
            }
            Effect::Dismiss(key) => {
                ctx.notifications.clear_key(key);
                Task::none()
            }
            Effect::FetchThumbnail(url) => {
                Task::perform(thumbnail::fetch(url.clone()), move |result| {
                    Message::Panel(gallery_panel::Message::ThumbnailLoaded { url, result })
                })
            }
        })
        .collect();

    Task::batch(tasks)
}
