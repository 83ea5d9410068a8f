// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the gallery panel to the store, toasts and
//! localization, and runs the iced event loop.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{GalleryStore, StoreError};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{self, UnavailableStore};
use crate::ui::gallery_panel::GalleryPanel;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub struct App {
    pub i18n: I18n,
    theme: Theme,
    store: Arc<dyn GalleryStore>,
    panel: GalleryPanel,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.panel.items().len())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the shared REST store, or a stand-in that reports why it is missing.
fn connect(config: &Config) -> Arc<dyn GalleryStore> {
    match infrastructure::rest::shared(&config.backend) {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "gallery backend unavailable");
            let reason = match err {
                StoreError::NotConfigured(reason) => reason,
                other => other.to_string(),
            };
            Arc::new(UnavailableStore::new(reason))
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let store = connect(&config);

        let mut app = Self::with_store(&config, i18n, store);
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = app.start();
        (app, task)
    }

    /// Builds the application around an already resolved store.
    pub fn with_store(config: &Config, i18n: I18n, store: Arc<dyn GalleryStore>) -> Self {
        Self {
            i18n,
            theme: config.general.theme_mode.theme(),
            store,
            panel: GalleryPanel::new(config.display.thumbnail_cache_size()),
            notifications: notifications::Manager::new(),
        }
    }

    /// Issues the initial list fetch.
    pub fn start(&mut self) -> Task<Message> {
        let effect = self.panel.load();
        update::apply_effects(&mut self.update_context(), vec![effect])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            panel: &mut self.panel,
            notifications: &mut self.notifications,
            store: &self.store,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.panel.is_animating(),
            self.notifications.has_notifications(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(message) => {
                update::handle_panel_message(&mut self.update_context(), message)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => update::handle_tick(&mut self.update_context()),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            panel: &self.panel,
            notifications: &self.notifications,
        })
    }

    pub fn panel(&self) -> &GalleryPanel {
        &self.panel
    }

    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}
