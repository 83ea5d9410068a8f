// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Resolves the notification text in the current locale.
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            return i18n.tr(notification.message_key());
        }
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }

    /// Layout: [glyph] [message] [dismiss]
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let glyph = Container::new(Text::new(severity.glyph()).size(typography::TITLE_SM).style(
            move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            },
        ))
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(alignment::Horizontal::Center);

        let message = Text::new(Self::message_text(notification, i18n)).size(typography::BODY);

        let dismiss = button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(button_styles::ghost);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// All visible toasts stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}
