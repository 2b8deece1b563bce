//! 终端前端：把按键翻译成 Action，执行 Store 返回的副作用

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::error::Result;
use crate::export::ExportFormat;
use crate::kernel::services::adapters::write_export;
use crate::kernel::services::ports::{DocumentStorage, Notice};
use crate::kernel::{
    properties_for, Action, BuilderState, DragPayload, DropTarget, Effect, FormModel,
    PropertyEditor, Store, ViewMode,
};
use crate::models::{Category, FieldId, FieldType, MoveDirection, OptionPatch};
use crate::schema::{EditorKind, PropertyValue};

use super::clipboard::copy_to_clipboard;
use super::prompt::{ExportTarget, Prompt, PromptKind};
use super::settings_rows::SettingKey;
use super::terminal::ExitSignal;
use super::toast::Toasts;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Palette,
    #[default]
    Canvas,
    Properties,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Palette => Focus::Canvas,
            Focus::Canvas => Focus::Properties,
            Focus::Properties => Focus::Palette,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Palette => Focus::Properties,
            Focus::Canvas => Focus::Palette,
            Focus::Properties => Focus::Canvas,
        }
    }
}

/// 属性面板中的一行
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyRow {
    Editor(PropertyEditor),
    Option(usize),
    AddOption,
    Setting(SettingKey),
}

pub type ClipboardFn = fn(&str) -> Result<()>;

pub struct App<S: DocumentStorage> {
    pub(super) store: Store,
    storage: S,
    export_dir: PathBuf,
    clipboard: ClipboardFn,
    pub(super) focus: Focus,
    pub(super) palette_cursor: usize,
    pub(super) property_cursor: usize,
    pub(super) prompt: Option<Prompt>,
    pub(super) toasts: Toasts,
    quit: bool,
}

impl<S: DocumentStorage> App<S> {
    /// 从存储中加载上次的文档；加载失败时从空文档开始并提示
    pub fn new(storage: S, export_dir: PathBuf) -> Self {
        let mut toasts = Toasts::default();
        let model = match storage.load() {
            Ok(Some(document)) => FormModel::with_document(document),
            Ok(None) => FormModel::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load saved form");
                toasts.push(Notice::from(&err), Instant::now());
                FormModel::new()
            }
        };
        Self {
            store: Store::new(BuilderState::new(model)),
            storage,
            export_dir,
            clipboard: copy_to_clipboard,
            focus: Focus::default(),
            palette_cursor: 0,
            property_cursor: 0,
            prompt: None,
            toasts,
            quit: false,
        }
    }

    pub fn with_clipboard(mut self, clipboard: ClipboardFn) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn state(&self) -> &BuilderState {
        self.store.state()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        signals: &Receiver<ExitSignal>,
    ) -> io::Result<()> {
        let mut dirty = true;
        while !self.quit {
            let now = Instant::now();
            dirty |= self.toasts.prune(now);
            if dirty {
                terminal.draw(|frame| self.render(frame))?;
                dirty = false;
            }

            if signals.try_recv().is_ok() {
                break;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key, Instant::now());
                    dirty = true;
                }
                Event::Paste(text) => {
                    if let Some(prompt) = self.prompt.as_mut() {
                        prompt.insert_str(&text);
                        dirty = true;
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
        Ok(())
    }

    pub(super) fn apply(&mut self, action: Action, now: Instant) {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect, now);
        }
        self.clamp_cursors();
    }

    fn run_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::PersistDocument => {
                if let Err(err) = self.storage.save(self.store.state().document()) {
                    tracing::warn!(error = %err, "failed to save form");
                    self.toasts.push(Notice::from(&err), now);
                }
            }
            Effect::Notify(notice) => self.toasts.push(notice, now),
            Effect::WriteExport {
                dir,
                file_name,
                contents,
            } => match write_export(&dir, &file_name, &contents) {
                Ok(path) => self
                    .toasts
                    .push(Notice::success(format!("Exported {}", path.display())), now),
                Err(err) => {
                    tracing::warn!(error = %err, "export failed");
                    self.toasts.push(Notice::from(&err), now);
                }
            },
            Effect::SetClipboardText(text) => match (self.clipboard)(&text) {
                Ok(()) => self.toasts.push(Notice::success("Copied to clipboard"), now),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard copy failed");
                    self.toasts.push(Notice::from(&err), now);
                }
            },
        }
    }

    fn clamp_cursors(&mut self) {
        let palette_len = self.store.state().palette.items().len();
        self.palette_cursor = self.palette_cursor.min(palette_len.saturating_sub(1));
        let rows = self.property_rows().len();
        self.property_cursor = self.property_cursor.min(rows.saturating_sub(1));
    }

    fn selected(&self) -> Option<FieldId> {
        self.store.state().selection.selected()
    }

    pub fn property_rows(&self) -> Vec<PropertyRow> {
        let state = self.store.state();
        let Some(field) = state.selection.selected().and_then(|id| state.document().field(id))
        else {
            return SettingKey::ALL.into_iter().map(PropertyRow::Setting).collect();
        };
        let schema = properties_for(field);
        let mut rows: Vec<PropertyRow> =
            schema.editors.into_iter().map(PropertyRow::Editor).collect();
        if schema.options_editor {
            rows.extend((0..field.options.len()).map(PropertyRow::Option));
            rows.push(PropertyRow::AddOption);
        }
        rows
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key, now);
            return;
        }
        if self.store.state().drag.is_dragging() {
            self.handle_drag_key(key, now);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('z') if ctrl => self.apply(Action::Undo, now),
            KeyCode::Char('y') if ctrl => self.apply(Action::Redo, now),
            KeyCode::Char('u') => self.apply(Action::Undo, now),
            KeyCode::Char('r') => self.apply(Action::Redo, now),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Char('p') => {
                let view = self.store.state().view.toggled();
                self.apply(Action::SetViewMode(view), now);
            }
            KeyCode::Char('T') => {
                let title = self.store.state().document().title.clone();
                self.prompt = Some(Prompt::new(PromptKind::Title, title));
            }
            KeyCode::Char('D') => {
                let description = self.store.state().document().description.clone();
                self.prompt = Some(Prompt::new(PromptKind::Description, description));
            }
            KeyCode::Char('e') => {
                self.prompt = Some(Prompt::new(PromptKind::Export(ExportTarget::File), "html"));
            }
            KeyCode::Char('c') => {
                self.prompt = Some(Prompt::new(
                    PromptKind::Export(ExportTarget::Clipboard),
                    "html",
                ));
            }
            KeyCode::Char('i') => {
                self.prompt = Some(Prompt::new(PromptKind::ImportPath, ""));
            }
            KeyCode::Char('X') => self.apply(Action::Clear, now),
            _ => match self.focus {
                Focus::Palette => self.handle_palette_key(key, now),
                Focus::Canvas => self.handle_canvas_key(key, now),
                Focus::Properties => self.handle_properties_key(key, now),
            },
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent, now: Instant) {
        let items = self.store.state().palette.items();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.palette_cursor = self.palette_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.palette_cursor + 1 < items.len() {
                    self.palette_cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.cycle_category(-1, now),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_category(1, now),
            KeyCode::Char('/') => {
                let query = self.store.state().palette.query.clone();
                self.prompt = Some(Prompt::new(PromptKind::PaletteSearch, query));
            }
            KeyCode::Enter | KeyCode::Char('a') => {
                if let Some(spec) = items.get(self.palette_cursor) {
                    let at = self
                        .selected()
                        .and_then(|id| self.store.state().document().position(id))
                        .map(|i| i + 1);
                    self.apply(
                        Action::AddField {
                            field_type: spec.field_type,
                            at,
                        },
                        now,
                    );
                }
            }
            KeyCode::Char('m') => {
                if let Some(spec) = items.get(self.palette_cursor) {
                    self.start_drag(
                        DragPayload::PaletteItem {
                            field_type: spec.field_type,
                        },
                        now,
                    );
                }
            }
            _ => {}
        }
    }

    fn cycle_category(&mut self, delta: isize, now: Instant) {
        // None 表示 "All" 分组
        let tabs: Vec<Option<Category>> = std::iter::once(None)
            .chain(Category::ALL.into_iter().map(Some))
            .collect();
        let current = self.store.state().palette.category;
        let i = tabs.iter().position(|c| *c == current).unwrap_or(0);
        let next = (i as isize + delta).rem_euclid(tabs.len() as isize) as usize;
        self.palette_cursor = 0;
        self.apply(Action::PaletteCategory(tabs[next]), now);
    }

    fn handle_canvas_key(&mut self, key: KeyEvent, now: Instant) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let selected = self.selected();
        match (key.code, selected) {
            (KeyCode::Up, Some(id)) if shift => self.apply(
                Action::MoveField {
                    id,
                    direction: MoveDirection::Up,
                },
                now,
            ),
            (KeyCode::Down, Some(id)) if shift => self.apply(
                Action::MoveField {
                    id,
                    direction: MoveDirection::Down,
                },
                now,
            ),
            (KeyCode::Char('K'), Some(id)) => self.apply(
                Action::MoveField {
                    id,
                    direction: MoveDirection::Up,
                },
                now,
            ),
            (KeyCode::Char('J'), Some(id)) => self.apply(
                Action::MoveField {
                    id,
                    direction: MoveDirection::Down,
                },
                now,
            ),
            (KeyCode::Up | KeyCode::Char('k'), _) => self.apply(Action::MoveSelection(-1), now),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.apply(Action::MoveSelection(1), now),
            (KeyCode::Esc, _) => self.apply(Action::Select(None), now),
            (KeyCode::Enter, Some(_)) => {
                self.property_cursor = 0;
                self.focus = Focus::Properties;
            }
            (KeyCode::Delete | KeyCode::Char('x'), Some(id)) => {
                self.apply(Action::RemoveField(id), now)
            }
            (KeyCode::Char('d'), Some(id)) => self.apply(Action::DuplicateField(id), now),
            (KeyCode::Char('m'), Some(id)) => {
                self.start_drag(DragPayload::CanvasField { id }, now)
            }
            _ => {}
        }
    }

    fn start_drag(&mut self, payload: DragPayload, now: Instant) {
        let document = self.store.state().document();
        let index = match payload {
            DragPayload::CanvasField { id } => document.position(id).unwrap_or(0),
            DragPayload::PaletteItem { .. } => self
                .selected()
                .and_then(|id| document.position(id))
                .map_or(document.len(), |i| i + 1),
        };
        let target = slot(index, document.len());
        self.focus = Focus::Canvas;
        self.apply(Action::DragStart(payload), now);
        self.apply(Action::DragOver(target), now);
    }

    fn handle_drag_key(&mut self, key: KeyEvent, now: Instant) {
        let len = self.store.state().document().len();
        let current = match self.store.state().drag.over() {
            Some(DropTarget::CanvasSlot { index }) => index,
            Some(DropTarget::CanvasEnd) | None => len,
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.apply(Action::DragOver(slot(current.saturating_sub(1), len)), now)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.apply(Action::DragOver(slot(current + 1, len)), now)
            }
            KeyCode::Enter | KeyCode::Char('m') => self.apply(Action::Drop, now),
            KeyCode::Esc => self.apply(Action::DragEnd, now),
            _ => {}
        }
    }

    fn handle_properties_key(&mut self, key: KeyEvent, now: Instant) {
        let rows = self.property_rows();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.property_cursor = self.property_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.property_cursor + 1 < rows.len() {
                    self.property_cursor += 1;
                }
            }
            KeyCode::Esc => self.focus = Focus::Canvas,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = rows.get(self.property_cursor).cloned() {
                    self.activate_row(row, key.code == KeyCode::Char(' '), now);
                }
            }
            KeyCode::Delete | KeyCode::Char('x') => {
                if let (Some(PropertyRow::Option(index)), Some(id)) =
                    (rows.get(self.property_cursor), self.selected())
                {
                    self.apply(Action::RemoveOption { id, index: *index }, now);
                }
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected() {
                    self.apply(Action::AddOption(id), now);
                }
            }
            _ => {}
        }
    }

    fn activate_row(&mut self, row: PropertyRow, space: bool, now: Instant) {
        let selected = self.selected();
        match (row, selected) {
            (PropertyRow::Editor(editor), Some(id)) => {
                if editor.kind == EditorKind::Toggle {
                    self.apply(Action::ToggleProperty { id, key: editor.key }, now);
                    return;
                }
                let Some(field) = self.store.state().document().field(id) else {
                    return;
                };
                let initial = match editor.key.read(&field.props) {
                    PropertyValue::Text(s) => s,
                    PropertyValue::Number(n) => n.map(|v| v.to_string()).unwrap_or_default(),
                    PropertyValue::Toggle(b) => b.to_string(),
                };
                self.prompt = Some(Prompt::new(
                    PromptKind::Property { id, key: editor.key },
                    initial,
                ));
            }
            (PropertyRow::Option(index), Some(id)) => {
                let Some(field) = self.store.state().document().field(id) else {
                    return;
                };
                let Some(option) = field.options.get(index) else {
                    return;
                };
                if space && field.field_type == FieldType::Checkbox {
                    let patch = OptionPatch {
                        checked: Some(!option.is_checked()),
                        ..OptionPatch::default()
                    };
                    self.apply(Action::UpdateOption { id, index, patch }, now);
                } else {
                    let label = option.label.clone();
                    self.prompt = Some(Prompt::new(PromptKind::OptionLabel { id, index }, label));
                }
            }
            (PropertyRow::AddOption, Some(id)) => self.apply(Action::AddOption(id), now),
            (PropertyRow::Setting(key), _) => {
                let settings = &self.store.state().document().settings;
                match key.cycled(settings) {
                    Some(patch) => self.apply(Action::UpdateSettings(patch), now),
                    None => {
                        let initial = key.value(settings);
                        self.prompt = Some(Prompt::new(PromptKind::Setting(key), initial));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        let live_search = prompt.kind == PromptKind::PaletteSearch;
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                return;
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit_prompt(prompt, now);
                }
                return;
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Delete => prompt.delete(),
            KeyCode::Left => prompt.left(),
            KeyCode::Right => prompt.right(),
            KeyCode::Home => prompt.home(),
            KeyCode::End => prompt.end(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.insert(ch)
            }
            _ => return,
        }
        if live_search {
            let query = prompt.text().to_string();
            self.palette_cursor = 0;
            self.apply(Action::PaletteQuery(query), now);
        }
    }

    fn submit_prompt(&mut self, prompt: Prompt, now: Instant) {
        let kind = prompt.kind.clone();
        let text = prompt.into_text();
        match kind {
            PromptKind::Property { id, key } => {
                self.apply(Action::SetProperty { id, key, input: text }, now)
            }
            PromptKind::OptionLabel { id, index } => {
                let patch = OptionPatch {
                    label: Some(text),
                    ..OptionPatch::default()
                };
                self.apply(Action::UpdateOption { id, index, patch }, now);
            }
            PromptKind::Setting(key) => match key.patch_from_input(&text) {
                Some(patch) => self.apply(Action::UpdateSettings(patch), now),
                None => self.toasts.push(
                    Notice::warning(format!("Invalid value for {}: {text}", key.label())),
                    now,
                ),
            },
            PromptKind::Title => self.apply(
                Action::UpdateForm {
                    title: Some(text),
                    description: None,
                },
                now,
            ),
            PromptKind::Description => self.apply(
                Action::UpdateForm {
                    title: None,
                    description: Some(text),
                },
                now,
            ),
            PromptKind::PaletteSearch => self.apply(Action::PaletteQuery(text), now),
            PromptKind::Export(target) => match text.parse::<ExportFormat>() {
                Ok(format) => {
                    let destination = target.destination(&self.export_dir);
                    self.apply(
                        Action::Export {
                            format,
                            destination,
                        },
                        now,
                    );
                }
                Err(err) => self.toasts.push(Notice::from(&err), now),
            },
            PromptKind::ImportPath => match std::fs::read_to_string(text.trim()) {
                Ok(json) => self.apply(Action::Import(json), now),
                Err(err) => {
                    tracing::warn!(path = %text.trim(), error = %err, "import read failed");
                    self.toasts
                        .push(Notice::error(format!("Cannot read {}: {err}", text.trim())), now);
                }
            },
        }
    }

    pub fn view(&self) -> ViewMode {
        self.store.state().view
    }
}

fn slot(index: usize, len: usize) -> DropTarget {
    if index >= len {
        DropTarget::CanvasEnd
    } else {
        DropTarget::CanvasSlot { index }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;
