// SPDX-License-Identifier: MPL-2.0
//! Root view: the gallery panel with toasts on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_panel::{self, GalleryPanel};
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub panel: &'a GalleryPanel,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = gallery_panel::view(gallery_panel::ViewContext {
        i18n: ctx.i18n,
        panel: ctx.panel,
    })
    .map(Message::Panel);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(panel)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
