// SPDX-License-Identifier: MPL-2.0
//! Gallery admin panel: the item list plus the add, edit and delete modals.
//!
//! The panel never talks to the network. Each transition returns
//! [`Effect`]s; remote calls are requested as [`Operation`]s and their
//! [`Completion`]s come back through [`Message::Completed`].
//!
//! List indicators:
//! - `loading`: set only for the initial fetch, cleared by every list result
//! - `refreshing`: set by [`Message::Refresh`], cleared by a refresh result
//! - `load_failed`: set by a failed fetch, cleared by a successful one

pub mod thumbnails;
mod view;

pub use thumbnails::{Thumbnail, ThumbnailCache};
pub use view::{view, ViewContext};

use crate::application::operation::{Completion, ListOrigin, Operation};
use crate::application::port::{StoreError, StoreResult};
use crate::domain::gallery::{sort_newest_first, Draft, DraftError, Field, GalleryItem, ItemId};
use crate::ui::notifications::Notification;
use crate::ui::widgets::animated_spinner;

/// Key of the toast raised by a failed list fetch.
pub const LIST_ERROR_KEY: &str = "notification-list-error";
const NOT_CONFIGURED_KEY: &str = "notification-backend-not-configured";

/// Which form modal a message targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Add,
    Edit,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenAdd,
    OpenEdit(ItemId),
    OpenDelete(ItemId),
    Close(Modal),
    FieldChanged(Form, Field, String),
    Submit(Form),
    ConfirmDelete,
    Refresh,
    Completed(Completion),
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    /// Animation frame for the refresh spinner.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Add,
    Edit,
    Delete,
}

/// Side effects the application performs after a transition.
#[derive(Debug, Clone)]
pub enum Effect {
    Run(Operation),
    Notify(Notification),
    /// Drop toasts with this key.
    Dismiss(&'static str),
    FetchThumbnail(String),
}

/// Draft plus submission state of one form modal.
#[derive(Debug, Clone, Default)]
pub struct FormModal {
    pub draft: Draft,
    pub error: Option<DraftError>,
    pub submitting: bool,
}

impl FormModal {
    fn with_draft(draft: Draft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditModal {
    pub id: ItemId,
    pub form: FormModal,
}

#[derive(Debug, Clone)]
pub struct DeleteModal {
    pub item: GalleryItem,
    pub submitting: bool,
}

#[derive(Debug)]
pub struct GalleryPanel {
    items: Vec<GalleryItem>,
    loading: bool,
    refreshing: bool,
    load_failed: bool,
    add: Option<FormModal>,
    edit: Option<EditModal>,
    delete: Option<DeleteModal>,
    thumbnails: ThumbnailCache,
    spinner_rotation: f32,
}

impl GalleryPanel {
    #[must_use]
    pub fn new(thumbnail_cache_size: usize) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            refreshing: false,
            load_failed: false,
            add: None,
            edit: None,
            delete: None,
            thumbnails: ThumbnailCache::new(thumbnail_cache_size),
            spinner_rotation: 0.0,
        }
    }

    /// Starts the initial fetch.
    pub fn load(&mut self) -> Effect {
        self.loading = true;
        Effect::Run(Operation::List(ListOrigin::Initial))
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::OpenAdd => {
                self.add = Some(FormModal::default());
                Vec::new()
            }
            Message::OpenEdit(id) => {
                self.open_edit(&id);
                Vec::new()
            }
            Message::OpenDelete(id) => {
                self.open_delete(&id);
                Vec::new()
            }
            Message::Close(modal) => {
                match modal {
                    Modal::Add => self.add = None,
                    Modal::Edit => self.edit = None,
                    Modal::Delete => self.delete = None,
                }
                Vec::new()
            }
            Message::FieldChanged(form, field, value) => {
                if let Some(modal) = self.form_mut(form) {
                    modal.draft.set(field, value);
                    if modal.error.is_some_and(|e| e.field() == field) {
                        modal.error = None;
                    }
                }
                Vec::new()
            }
            Message::Submit(form) => self.submit(form).into_iter().collect(),
            Message::ConfirmDelete => self.confirm_delete().into_iter().collect(),
            Message::Refresh => {
                self.refreshing = true;
                vec![Effect::Run(Operation::List(ListOrigin::Refresh))]
            }
            Message::Completed(completion) => self.complete(completion),
            Message::ThumbnailLoaded { url, result } => {
                self.thumbnails.resolve(url, result);
                Vec::new()
            }
            Message::Tick => {
                if self.is_animating() {
                    self.spinner_rotation = animated_spinner::next_rotation(self.spinner_rotation);
                }
                Vec::new()
            }
        }
    }

    fn open_edit(&mut self, id: &ItemId) {
        match self.items.iter().find(|item| &item.id == id) {
            Some(item) => {
                self.edit = Some(EditModal {
                    id: item.id.clone(),
                    form: FormModal::with_draft(Draft::from_item(item)),
                });
            }
            None => tracing::debug!(%id, "edit requested for unknown item"),
        }
    }

    fn open_delete(&mut self, id: &ItemId) {
        match self.items.iter().find(|item| &item.id == id) {
            Some(item) => {
                self.delete = Some(DeleteModal {
                    item: item.clone(),
                    submitting: false,
                });
            }
            None => tracing::debug!(%id, "delete requested for unknown item"),
        }
    }

    fn form_mut(&mut self, form: Form) -> Option<&mut FormModal> {
        match form {
            Form::Add => self.add.as_mut(),
            Form::Edit => self.edit.as_mut().map(|edit| &mut edit.form),
        }
    }

    fn submit(&mut self, form: Form) -> Option<Effect> {
        let target = self.edit.as_ref().map(|edit| edit.id.clone());
        let modal = self.form_mut(form)?;
        if modal.submitting {
            return None;
        }

        let row = match modal.draft.validate() {
            Ok(row) => row,
            Err(err) => {
                modal.error = Some(err);
                return None;
            }
        };
        modal.error = None;
        modal.submitting = true;

        let operation = match form {
            Form::Add => Operation::Create(row),
            Form::Edit => Operation::Update(target?, row),
        };
        Some(Effect::Run(operation))
    }

    fn confirm_delete(&mut self) -> Option<Effect> {
        let modal = self.delete.as_mut()?;
        if modal.submitting {
            return None;
        }
        modal.submitting = true;
        Some(Effect::Run(Operation::Delete(modal.item.id.clone())))
    }

    fn complete(&mut self, completion: Completion) -> Vec<Effect> {
        match completion {
            Completion::Listed { origin, result } => self.listed(origin, result),
            Completion::Created(result) => {
                if result.is_ok() {
                    // A modal reopened since the submit is left alone.
                    if self.add.as_ref().is_some_and(|m| m.submitting) {
                        self.add = None;
                    }
                } else if let Some(modal) = self.add.as_mut() {
                    modal.submitting = false;
                }
                write_effects("create", result)
            }
            Completion::Updated { id, result } => {
                let own = self.edit.as_mut().filter(|m| m.id == id);
                if result.is_ok() {
                    if own.is_some_and(|m| m.form.submitting) {
                        self.edit = None;
                    }
                } else if let Some(modal) = own {
                    modal.form.submitting = false;
                }
                write_effects("update", result)
            }
            Completion::Deleted { id, result } => {
                let own = self.delete.as_mut().filter(|m| m.item.id == id);
                if result.is_ok() {
                    if own.is_some_and(|m| m.submitting) {
                        self.delete = None;
                    }
                } else if let Some(modal) = own {
                    modal.submitting = false;
                }
                write_effects("delete", result)
            }
        }
    }

    fn listed(
        &mut self,
        origin: ListOrigin,
        result: StoreResult<Vec<GalleryItem>>,
    ) -> Vec<Effect> {
        self.loading = false;
        if origin == ListOrigin::Refresh {
            self.refreshing = false;
        }

        match result {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                tracing::debug!(count = items.len(), ?origin, "gallery list loaded");
                self.items = items;
                self.load_failed = false;

                let mut effects = vec![Effect::Dismiss(LIST_ERROR_KEY)];
                self.thumbnails.reserve(self.items.len());
                for item in &self.items {
                    if self.thumbnails.request(&item.image) {
                        effects.push(Effect::FetchThumbnail(item.image.clone()));
                    }
                }
                effects
            }
            Err(err) => {
                tracing::warn!(?origin, error = %err, "gallery list failed");
                self.load_failed = true;
                vec![Effect::Notify(failure_notification(LIST_ERROR_KEY, &err))]
            }
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn add_modal(&self) -> Option<&FormModal> {
        self.add.as_ref()
    }

    pub fn edit_modal(&self) -> Option<&EditModal> {
        self.edit.as_ref()
    }

    pub fn delete_modal(&self) -> Option<&DeleteModal> {
        self.delete.as_ref()
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Whether a spinner is on screen and needs animation ticks.
    pub fn is_animating(&self) -> bool {
        self.loading || self.refreshing
    }
}

/// Effects shared by create, update and delete completions.
///
/// Success shows a toast and re-fetches the list; failure shows the error
/// and leaves the modal open with its draft for another attempt.
fn write_effects(operation: &'static str, result: StoreResult<()>) -> Vec<Effect> {
    match result {
        Ok(()) => {
            tracing::info!(operation, "gallery write succeeded");
            vec![
                Effect::Notify(Notification::success(format!(
                    "notification-{operation}-success"
                ))),
                Effect::Run(Operation::List(ListOrigin::AfterWrite)),
            ]
        }
        Err(err) => {
            tracing::warn!(operation, error = %err, "gallery write failed");
            vec![Effect::Notify(failure_notification(
                &format!("notification-{operation}-error"),
                &err,
            ))]
        }
    }
}

/// Error toast for a failed store call; an unconfigured backend gets its own text.
fn failure_notification(key: &str, err: &StoreError) -> Notification {
    match err {
        StoreError::NotConfigured(reason) => {
            Notification::error(NOT_CONFIGURED_KEY).with_arg("reason", reason.as_str())
        }
        other => Notification::error(key).with_arg("error", other.to_string()),
    }
}
