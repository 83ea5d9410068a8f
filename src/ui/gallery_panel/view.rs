// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery panel and its modals.

use super::{DeleteModal, Form, FormModal, GalleryPanel, Message, Modal, Thumbnail};
use crate::domain::gallery::{Field, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::AnimatedSpinner;
use chrono::Local;
use iced::widget::{
    button, image, mouse_area, opaque, text_input, Column, Container, Row, Scrollable, Stack,
    Text,
};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub panel: &'a GalleryPanel,
}

const FORM_FIELDS: [(Field, &str, &str); 4] = [
    (Field::Title, "form-title-label", "form-title-placeholder"),
    (Field::Image, "form-image-label", "form-image-placeholder"),
    (
        Field::Description,
        "form-description-label",
        "form-description-placeholder",
    ),
    (
        Field::Motivation,
        "form-motivation-label",
        "form-motivation-placeholder",
    ),
];

/// Renders the list with any open modals layered on top.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let panel = ctx.panel;

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header(panel, i18n))
        .push(body(panel, i18n))
        .max_width(sizing::CONTENT_MAX_WIDTH);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    let mut layers = Stack::new().push(base);
    if let Some(modal) = panel.add_modal() {
        layers = layers.push(modal_layer(
            add_dialog(modal, i18n),
            Message::Close(Modal::Add),
        ));
    }
    if let Some(modal) = panel.edit_modal() {
        layers = layers.push(modal_layer(
            form_dialog(Form::Edit, &modal.form, i18n),
            Message::Close(Modal::Edit),
        ));
    }
    if let Some(modal) = panel.delete_modal() {
        layers = layers.push(modal_layer(
            delete_dialog(modal, i18n),
            Message::Close(Modal::Delete),
        ));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn header<'a>(panel: &'a GalleryPanel, i18n: &'a I18n) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("panel-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("panel-subtitle")).size(typography::BODY));

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if panel.is_refreshing() {
        actions = actions.push(
            AnimatedSpinner::new(palette::PRIMARY_500, panel.spinner_rotation())
                .size(sizing::ICON_MD)
                .into_element(),
        );
    }
    actions = actions
        .push(
            button(Text::new(i18n.tr("panel-refresh-button")).size(typography::BODY))
                .on_press_maybe((!panel.is_loading()).then_some(Message::Refresh))
                .style(button_styles::secondary),
        )
        .push(
            button(Text::new(i18n.tr("panel-add-button")).size(typography::BODY))
                .on_press(Message::OpenAdd)
                .style(button_styles::primary),
        );

    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(titles).width(Length::Fill))
        .push(actions)
        .into()
}

fn body<'a>(panel: &'a GalleryPanel, i18n: &'a I18n) -> Element<'a, Message> {
    if panel.is_loading() && panel.items().is_empty() {
        return centered(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(
                    AnimatedSpinner::new(palette::PRIMARY_500, panel.spinner_rotation())
                        .size(sizing::ICON_LG)
                        .into_element(),
                )
                .push(Text::new(i18n.tr("panel-loading")).size(typography::BODY))
                .into(),
        );
    }

    if panel.items().is_empty() {
        if panel.load_failed() {
            return centered(error_banner(i18n));
        }
        return centered(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("panel-empty")).size(typography::TITLE_SM))
                .push(Text::new(i18n.tr("panel-empty-hint")).size(typography::BODY))
                .into(),
        );
    }

    let rows = panel
        .items()
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, item| {
            column.push(item_card(panel, item, i18n))
        });

    let mut body = Column::new().spacing(spacing::MD);
    if panel.load_failed() {
        body = body.push(error_banner(i18n));
    }
    body.push(Scrollable::new(rows).height(Length::Fill)).into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn error_banner(i18n: &I18n) -> Element<'_, Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr("panel-error")).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("panel-retry-button")).size(typography::BODY_SM))
                .on_press(Message::Refresh)
                .style(button_styles::secondary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::error_banner)
        .into()
}

fn item_card<'a>(
    panel: &'a GalleryPanel,
    item: &'a GalleryItem,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let created = item
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr_with_args("panel-created-at", &[("date", created.as_str())]))
                .size(typography::CAPTION)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    details = match item.description.as_deref() {
        Some(description) => details.push(Text::new(description).size(typography::BODY)),
        None => details.push(Text::new(i18n.tr("panel-no-description")).size(typography::BODY_SM)),
    };
    if let Some(motivation) = item.motivation.as_deref() {
        details = details.push(Text::new(motivation).size(typography::BODY_SM));
    }

    let actions = Column::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("panel-edit-button")).size(typography::BODY_SM))
                .on_press(Message::OpenEdit(item.id.clone()))
                .style(button_styles::secondary),
        )
        .push(
            button(Text::new(i18n.tr("panel-delete-button")).size(typography::BODY_SM))
                .on_press(Message::OpenDelete(item.id.clone()))
                .style(button_styles::danger),
        );

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(thumbnail(panel, &item.image, i18n))
        .push(Container::new(details).width(Length::Fill))
        .push(actions);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::card)
        .into()
}

fn thumbnail<'a>(panel: &'a GalleryPanel, url: &str, i18n: &'a I18n) -> Element<'a, Message> {
    let size = Length::Fixed(sizing::THUMBNAIL);

    let placeholder = match panel.thumbnails().peek(url) {
        Some(Thumbnail::Ready(handle)) => {
            return image(handle.clone())
                .width(size)
                .height(size)
                .content_fit(ContentFit::Cover)
                .into();
        }
        Some(Thumbnail::Failed) => {
            Text::new(i18n.tr("panel-thumbnail-unavailable")).size(typography::CAPTION)
        }
        Some(Thumbnail::Loading) | None => Text::new("…").size(typography::TITLE_SM),
    };

    Container::new(placeholder)
        .width(size)
        .height(size)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::thumbnail_placeholder)
        .into()
}

/// Dims everything below and closes the modal on a click outside the dialog.
fn modal_layer(dialog: Element<'_, Message>, on_blur: Message) -> Element<'_, Message> {
    let centered = Container::new(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::backdrop);

    opaque(mouse_area(centered).on_press(on_blur))
}

fn dialog<'a>(
    title: String,
    body: Column<'a, Message>,
    actions: Row<'a, Message>,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(body)
        .push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(container_styles::modal)
        .into()
}

fn add_dialog<'a>(modal: &'a FormModal, i18n: &'a I18n) -> Element<'a, Message> {
    form_dialog(Form::Add, modal, i18n)
}

fn form_dialog<'a>(form: Form, modal: &'a FormModal, i18n: &'a I18n) -> Element<'a, Message> {
    let (title_key, submit_key, close) = match form {
        Form::Add => ("modal-add-title", "modal-create", Modal::Add),
        Form::Edit => ("modal-edit-title", "modal-save", Modal::Edit),
    };
    let editable = !modal.submitting;

    let fields = FORM_FIELDS.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, &(field, label_key, placeholder_key)| {
            let mut entry = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
                .push(
                    text_input(&i18n.tr(placeholder_key), modal.draft.get(field))
                        .on_input_maybe(editable.then_some(move |value| {
                            Message::FieldChanged(form, field, value)
                        }))
                        .on_submit_maybe(editable.then_some(Message::Submit(form)))
                        .padding(spacing::XS)
                        .size(typography::BODY),
                );
            if let Some(error) = modal.error.filter(|e| e.field() == field) {
                entry = entry.push(
                    Text::new(i18n.tr(error.i18n_key()))
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| iced::widget::text::Style {
                            color: Some(palette::ERROR_500),
                        }),
                );
            }
            column.push(entry)
        },
    );

    let submit_label = if modal.submitting {
        i18n.tr("modal-submitting")
    } else {
        i18n.tr(submit_key)
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("modal-cancel")).size(typography::BODY))
                .on_press(Message::Close(close))
                .style(button_styles::secondary),
        )
        .push(
            button(Text::new(submit_label).size(typography::BODY))
                .on_press_maybe(editable.then_some(Message::Submit(form)))
                .style(button_styles::primary),
        );

    dialog(i18n.tr(title_key), fields, actions)
}

fn delete_dialog<'a>(modal: &'a DeleteModal, i18n: &'a I18n) -> Element<'a, Message> {
    let body = Column::new().push(
        Text::new(i18n.tr_with_args(
            "modal-delete-body",
            &[("title", modal.item.title.as_str())],
        ))
        .size(typography::BODY),
    );

    let confirm_label = if modal.submitting {
        i18n.tr("modal-submitting")
    } else {
        i18n.tr("modal-delete-confirm")
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("modal-cancel")).size(typography::BODY))
                .on_press(Message::Close(Modal::Delete))
                .style(button_styles::secondary),
        )
        .push(
            button(Text::new(confirm_label).size(typography::BODY))
                .on_press_maybe((!modal.submitting).then_some(Message::ConfirmDelete))
                .style(button_styles::danger),
        );

    dialog(i18n.tr("modal-delete-title"), body, actions)
}
