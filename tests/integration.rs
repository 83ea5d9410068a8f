// SPDX-License-Identifier: MPL-2.0
use chrono::{TimeZone, Utc};
use gallery_admin::application::operation::{execute, Completion};
use gallery_admin::application::port::{GalleryStore, StoreError, StoreFuture};
use gallery_admin::config::{self, Config};
use gallery_admin::domain::gallery::{Field, GalleryItem, GalleryRow, ItemId};
use gallery_admin::i18n::fluent::I18n;
use gallery_admin::ui::gallery_panel::{Effect, Form, GalleryPanel, Message};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// In-memory table that assigns ids and creation times like the backend.
#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<GalleryItem>>,
}

impl MemoryStore {
    fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
    }
}

impl GalleryStore for MemoryStore {
    fn list(&self) -> StoreFuture<Vec<GalleryItem>> {
        let rows = self.rows.lock().unwrap().clone();
        Box::pin(async move { Ok(rows) })
    }

    fn insert(&self, row: GalleryRow) -> StoreFuture<()> {
        let mut rows = self.rows.lock().unwrap();
        let next = rows.len() as i64 + 1;
        rows.push(GalleryItem {
            id: ItemId::Int(next),
            title: row.title,
            image: row.image,
            description: row.description,
            motivation: row.motivation,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(next),
        });
        Box::pin(async { Ok(()) })
    }

    fn update(&self, id: ItemId, row: GalleryRow) -> StoreFuture<()> {
        let mut rows = self.rows.lock().unwrap();
        let result = match rows.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.title = row.title;
                item.image = row.image;
                item.description = row.description;
                item.motivation = row.motivation;
                Ok(())
            }
            None => Err(StoreError::Status {
                status: 404,
                message: "not found".into(),
            }),
        };
        Box::pin(async move { result })
    }

    fn delete(&self, id: ItemId) -> StoreFuture<()> {
        self.rows.lock().unwrap().retain(|item| item.id != id);
        Box::pin(async { Ok(()) })
    }
}

/// Runs every requested operation and feeds completions back until idle.
async fn drive(panel: &mut GalleryPanel, store: &Arc<dyn GalleryStore>, effects: Vec<Effect>) {
    let mut pending = effects;
    while let Some(effect) = pending.pop() {
        if let Effect::Run(operation) = effect {
            let completion: Completion = execute(store.clone(), operation).await;
            pending.extend(panel.update(Message::Completed(completion)));
        }
    }
}

#[tokio::test]
async fn add_edit_delete_round_trip_through_panel() {
    let memory = Arc::new(MemoryStore::default());
    let store: Arc<dyn GalleryStore> = memory.clone();
    let mut panel = GalleryPanel::new(8);

    let initial = panel.load();
    drive(&mut panel, &store, vec![initial]).await;
    assert!(!panel.is_loading());
    assert!(panel.items().is_empty());

    for (title, image) in [
        ("Sunrise", "https://cdn.example.com/sunrise.png"),
        ("Harbor", "https://cdn.example.com/harbor.png"),
    ] {
        panel.update(Message::OpenAdd);
        panel.update(Message::FieldChanged(Form::Add, Field::Title, title.into()));
        panel.update(Message::FieldChanged(Form::Add, Field::Image, image.into()));
        let effects = panel.update(Message::Submit(Form::Add));
        drive(&mut panel, &store, effects).await;
        assert!(panel.add_modal().is_none());
    }

    assert_eq!(memory.len(), 2);
    let titles: Vec<_> = panel.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Harbor", "Sunrise"]);

    panel.update(Message::OpenEdit(ItemId::Int(1)));
    panel.update(Message::FieldChanged(
        Form::Edit,
        Field::Title,
        "Sunrise over the bay".into(),
    ));
    let effects = panel.update(Message::Submit(Form::Edit));
    drive(&mut panel, &store, effects).await;
    assert!(panel.edit_modal().is_none());
    assert!(panel
        .items()
        .iter()
        .any(|item| item.title == "Sunrise over the bay"));

    panel.update(Message::OpenDelete(ItemId::Int(2)));
    let effects = panel.update(Message::ConfirmDelete);
    drive(&mut panel, &store, effects).await;
    assert!(panel.delete_modal().is_none());
    assert_eq!(panel.items().len(), 1);
    assert_eq!(memory.len(), 1);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_store() {
    let memory = Arc::new(MemoryStore::default());
    let store: Arc<dyn GalleryStore> = memory.clone();
    let mut panel = GalleryPanel::new(8);

    panel.update(Message::OpenAdd);
    panel.update(Message::FieldChanged(Form::Add, Field::Title, "No image".into()));
    let effects = panel.update(Message::Submit(Form::Add));
    assert!(effects.is_empty());
    drive(&mut panel, &store, effects).await;

    assert_eq!(memory.len(), 0);
    assert!(panel.add_modal().and_then(|m| m.error).is_some());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("window-title"), i18n_en.tr("window-title"));
}

#[test]
fn backend_section_survives_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut written = Config::default();
    written.backend.url = Some("https://project.example.co".into());
    written.backend.table = Some("artworks".into());
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.backend.url.as_deref(), Some("https://project.example.co"));
    assert_eq!(loaded.backend.table(), "artworks");
}

#[test]
fn every_locale_translates_form_errors() {
    use gallery_admin::domain::gallery::DraftError;

    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.into()), None, &Config::default());
        for err in [
            DraftError::MissingTitle,
            DraftError::MissingImage,
            DraftError::InvalidImageUrl,
        ] {
            let text = i18n.tr(err.i18n_key());
            assert!(!text.starts_with("MISSING:"), "{lang}: {text}");
        }
    }
}
