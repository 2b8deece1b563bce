use super::*;
use crate::error::FormError;
use crate::kernel::services::adapters::MemoryStorage;
use crate::models::{FormDocument, Theme};
use crate::schema::PropertyKey;
use std::cell::RefCell;
use tempfile::tempdir;

thread_local! {
    static COPIED: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn capture_clipboard(text: &str) -> Result<()> {
    COPIED.with(|c| *c.borrow_mut() = Some(text.to_string()));
    Ok(())
}

fn copied() -> Option<String> {
    COPIED.with(|c| c.borrow().clone())
}

fn new_app() -> App<MemoryStorage> {
    App::new(MemoryStorage::new(), std::env::temp_dir()).with_clipboard(capture_clipboard)
}

fn key(app: &mut App<MemoryStorage>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn ctrl(app: &mut App<MemoryStorage>, ch: char) {
    app.handle_key(
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL),
        Instant::now(),
    );
}

fn type_text(app: &mut App<MemoryStorage>, text: &str) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn add(app: &mut App<MemoryStorage>, field_type: FieldType) -> FieldId {
    app.apply(
        Action::AddField {
            field_type,
            at: None,
        },
        Instant::now(),
    );
    app.state().selection.selected().unwrap()
}

fn toast_messages<S: DocumentStorage>(app: &App<S>) -> Vec<String> {
    app.toasts.iter().map(|t| t.notice.message.clone()).collect()
}

struct BrokenStorage;

impl DocumentStorage for BrokenStorage {
    fn load(&self) -> Result<Option<FormDocument>> {
        Err(FormError::InvalidImport("corrupt".to_string()))
    }

    fn save(&self, _document: &FormDocument) -> Result<()> {
        Err(FormError::Storage(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

#[test]
fn starts_from_saved_document() {
    let mut doc = FormDocument::new();
    doc.title = "Saved".to_string();
    let app = App::new(MemoryStorage::with_document(doc), std::env::temp_dir());
    assert_eq!(app.state().document().title, "Saved");
    assert!(app.toasts.is_empty());
    assert_eq!(app.view(), ViewMode::Canvas);
}

#[test]
fn stored_document_with_duplicate_ids_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("form.json");
    std::fs::write(
        &path,
        r#"{"title": "Broken", "fields": [{"id": 7, "type": "text"}, {"id": 7, "type": "text"}]}"#,
    )
    .unwrap();

    let app = App::new(
        crate::kernel::services::adapters::JsonFileStorage::new(&path),
        dir.path().to_path_buf(),
    );
    assert!(app.state().document().is_empty());
    assert_eq!(app.state().document().title, crate::models::DEFAULT_TITLE);
    let messages = toast_messages(&app);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("duplicate id"));
}

#[test]
fn storage_failures_become_toasts() {
    let mut app = App::new(BrokenStorage, std::env::temp_dir());
    assert!(app.state().document().is_empty());
    assert_eq!(toast_messages(&app), ["invalid import: corrupt"]);

    app.apply(
        Action::AddField {
            field_type: FieldType::Text,
            at: None,
        },
        Instant::now(),
    );
    assert_eq!(app.state().document().len(), 1);
    assert!(toast_messages(&app)
        .iter()
        .any(|m| m.contains("read-only")));
}

#[test]
fn quit_keys() {
    let mut app = new_app();
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app();
    ctrl(&mut app, 'c');
    assert!(app.should_quit());
}

#[test]
fn palette_enter_adds_after_selection_and_persists() {
    let mut app = new_app();
    key(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Palette);

    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Char('j'));
    key(&mut app, KeyCode::Enter);

    let types: Vec<_> = app
        .state()
        .document()
        .fields
        .iter()
        .map(|f| f.field_type)
        .collect();
    assert_eq!(types, [FieldType::Text, FieldType::Textarea]);
    assert_eq!(app.storage().save_count(), 2);
    assert_eq!(
        app.storage().snapshot().as_ref(),
        Some(app.state().document())
    );
    assert!(toast_messages(&app).contains(&"Field added".to_string()));
}

#[test]
fn palette_search_filters_live() {
    let mut app = new_app();
    key(&mut app, KeyCode::BackTab);
    key(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "radio");
    assert_eq!(app.state().palette.query, "radio");
    assert_eq!(app.state().palette.items().len(), 1);

    key(&mut app, KeyCode::Enter);
    assert!(app.prompt.is_none());
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().document().fields[0].field_type, FieldType::Radio);
}

#[test]
fn palette_category_tabs_wrap() {
    let mut app = new_app();
    key(&mut app, KeyCode::BackTab);
    key(&mut app, KeyCode::Right);
    assert_eq!(app.state().palette.category, Some(Category::Basic));
    key(&mut app, KeyCode::Left);
    key(&mut app, KeyCode::Left);
    assert_eq!(app.state().palette.category, Some(Category::Content));
}

#[test]
fn canvas_keys_edit_fields() {
    let mut app = new_app();
    let a = add(&mut app, FieldType::Text);
    let b = add(&mut app, FieldType::Email);

    key(&mut app, KeyCode::Char('k'));
    assert_eq!(app.state().selection.selected(), Some(a));
    key(&mut app, KeyCode::Char('J'));
    assert_eq!(app.state().document().ids().collect::<Vec<_>>(), [b, a]);
    app.handle_key(
        KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT),
        Instant::now(),
    );
    assert_eq!(app.state().document().ids().collect::<Vec<_>>(), [a, b]);

    key(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().document().len(), 3);
    key(&mut app, KeyCode::Char('x'));
    assert_eq!(app.state().document().len(), 2);

    key(&mut app, KeyCode::Char('u'));
    assert_eq!(app.state().document().len(), 3);
    ctrl(&mut app, 'y');
    assert_eq!(app.state().document().len(), 2);

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state().selection.selected(), None);
}

#[test]
fn clear_and_preview_toggle() {
    let mut app = new_app();
    add(&mut app, FieldType::Text);
    key(&mut app, KeyCode::Char('p'));
    assert_eq!(app.view(), ViewMode::Preview);
    key(&mut app, KeyCode::Char('p'));
    assert_eq!(app.view(), ViewMode::Canvas);

    key(&mut app, KeyCode::Char('X'));
    assert!(app.state().document().is_empty());
    assert!(toast_messages(&app).contains(&"Cleared 1 field(s)".to_string()));
}

#[test]
fn property_rows_depend_on_selection() {
    let mut app = new_app();
    assert_eq!(app.property_rows().len(), SettingKey::ALL.len());

    add(&mut app, FieldType::Checkbox);
    let rows = app.property_rows();
    assert!(matches!(&rows[0], PropertyRow::Editor(e) if e.key == PropertyKey::Label));
    assert_eq!(rows[3], PropertyRow::Option(0));
    assert_eq!(rows.last(), Some(&PropertyRow::AddOption));
    assert_eq!(rows.len(), 3 + 3 + 1);
}

#[test]
fn properties_panel_edits_field() {
    let mut app = new_app();
    let id = add(&mut app, FieldType::Text);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Properties);

    // Label
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.prompt.as_ref().map(|p| p.text()), Some("Text Input"));
    type_text(&mut app, "!");
    key(&mut app, KeyCode::Enter);
    let field = app.state().document().field(id).unwrap();
    assert_eq!(field.props.label.as_deref(), Some("Text Input!"));

    // Required
    for _ in 0..4 {
        key(&mut app, KeyCode::Down);
    }
    key(&mut app, KeyCode::Char(' '));
    assert!(app.state().document().field(id).unwrap().is_required());

    // Min Length：非法输入只提示
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    type_text(&mut app, "abc");
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().document().field(id).unwrap().props.min_length, None);
    assert!(toast_messages(&app).contains(&"Invalid value for Min Length: abc".to_string()));

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.focus, Focus::Canvas);
}

#[test]
fn options_panel_toggles_and_removes() {
    let mut app = new_app();
    let id = add(&mut app, FieldType::Checkbox);
    key(&mut app, KeyCode::Enter);

    for _ in 0..4 {
        key(&mut app, KeyCode::Down);
    }
    key(&mut app, KeyCode::Char(' '));
    let field = app.state().document().field(id).unwrap();
    assert!(field.options[1].is_checked());

    key(&mut app, KeyCode::Enter);
    assert!(matches!(
        app.prompt.as_ref().map(|p| &p.kind),
        Some(PromptKind::OptionLabel { index: 1, .. })
    ));
    key(&mut app, KeyCode::Esc);
    assert!(app.prompt.is_none());

    key(&mut app, KeyCode::Char('x'));
    assert_eq!(app.state().document().field(id).unwrap().options.len(), 2);

    key(&mut app, KeyCode::Char('a'));
    let options = &app.state().document().field(id).unwrap().options;
    assert_eq!(options.len(), 3);
    assert_eq!(options[2].value, "option3");
}

#[test]
fn settings_rows_without_selection() {
    let mut app = new_app();
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Properties);

    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().document().settings.theme, Theme::Dark);

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.prompt.as_ref().map(|p| p.text()), Some("600"));
    for _ in 0..3 {
        key(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "720");
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().document().settings.width, 720);
}

#[test]
fn title_prompt_updates_form() {
    let mut app = new_app();
    key(&mut app, KeyCode::Char('T'));
    app.prompt.as_mut().unwrap().insert_str(" v2");
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().document().title, "Untitled Form v2");

    key(&mut app, KeyCode::Char('D'));
    type_text(&mut app, "About you");
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().document().description, "About you");
}

#[test]
fn keyboard_drag_from_palette_inserts_at_slot() {
    let mut app = new_app();
    let first = add(&mut app, FieldType::Text);
    let second = add(&mut app, FieldType::Email);

    key(&mut app, KeyCode::BackTab);
    key(&mut app, KeyCode::Char('m'));
    assert!(app.state().drag.is_dragging());
    assert_eq!(app.focus, Focus::Canvas);
    assert_eq!(app.state().drag.over(), Some(DropTarget::CanvasEnd));

    key(&mut app, KeyCode::Up);
    assert_eq!(
        app.state().drag.over(),
        Some(DropTarget::CanvasSlot { index: 1 })
    );
    key(&mut app, KeyCode::Enter);

    let doc = app.state().document();
    assert!(!app.state().drag.is_dragging());
    assert_eq!(doc.fields[0].id, first);
    assert_eq!(doc.fields[1].field_type, FieldType::Text);
    assert_eq!(doc.fields[2].id, second);
    assert_eq!(app.state().selection.selected(), Some(doc.fields[1].id));
}

#[test]
fn keyboard_drag_reorders_canvas_field() {
    let mut app = new_app();
    let a = add(&mut app, FieldType::Text);
    let b = add(&mut app, FieldType::Email);
    let c = add(&mut app, FieldType::Url);
    app.apply(Action::Select(Some(a)), Instant::now());

    key(&mut app, KeyCode::Char('m'));
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().document().ids().collect::<Vec<_>>(), [b, c, a]);

    key(&mut app, KeyCode::Char('m'));
    key(&mut app, KeyCode::Esc);
    assert!(!app.state().drag.is_dragging());
    assert_eq!(app.state().document().ids().collect::<Vec<_>>(), [b, c, a]);
}

#[test]
fn export_prompt_writes_file() {
    let dir = tempdir().unwrap();
    let mut app = App::new(MemoryStorage::new(), dir.path().to_path_buf());
    add(&mut app, FieldType::Email);

    key(&mut app, KeyCode::Char('e'));
    assert_eq!(app.prompt.as_ref().map(|p| p.text()), Some("html"));
    key(&mut app, KeyCode::Enter);

    let path = dir.path().join("untitled-form.html");
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("type=\"email\""));
    assert!(toast_messages(&app)
        .iter()
        .any(|m| m.starts_with("Exported ")));
}

#[test]
fn export_prompt_rejects_unknown_format() {
    let mut app = new_app();
    key(&mut app, KeyCode::Char('e'));
    for _ in 0..4 {
        key(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "pdf");
    key(&mut app, KeyCode::Enter);
    assert!(toast_messages(&app)
        .iter()
        .any(|m| m.contains("unsupported format: pdf")));
}

#[test]
fn clipboard_export_uses_clipboard_fn() {
    let mut app = new_app();
    add(&mut app, FieldType::Text);
    key(&mut app, KeyCode::Char('c'));
    for _ in 0..4 {
        key(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "json");
    key(&mut app, KeyCode::Enter);

    let text = copied().unwrap();
    assert!(text.contains("\"exportedAt\""));
    assert!(toast_messages(&app).contains(&"Copied to clipboard".to_string()));
}

#[test]
fn import_prompt_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("form.json");
    std::fs::write(&path, r#"[{"id": 4, "type": "url", "label": "Site"}]"#).unwrap();

    let mut app = new_app();
    key(&mut app, KeyCode::Char('i'));
    app.prompt
        .as_mut()
        .unwrap()
        .insert_str(&path.to_string_lossy());
    key(&mut app, KeyCode::Enter);

    let doc = app.state().document();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.fields[0].display_label(), "Site");

    key(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "/definitely/missing.json");
    key(&mut app, KeyCode::Enter);
    assert!(toast_messages(&app)
        .iter()
        .any(|m| m.starts_with("Cannot read /definitely/missing.json")));
}
