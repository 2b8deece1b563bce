use crate::error::{FormError, Result};
use crate::export::{self, ExportFormat};
use crate::models::FieldId;
use crate::schema::PropertyKey;

use super::action::{Action, ExportDestination};
use super::dnd::{drop_intent, DropIntent};
use super::effect::Effect;
use super::services::ports::Notice;
use super::state::BuilderState;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    /// 文档变了：需要持久化
    fn mutated() -> Self {
        Self {
            effects: vec![Effect::PersistDocument],
            state_changed: true,
        }
    }

    fn notify(mut self, notice: Notice) -> Self {
        self.effects.push(Effect::Notify(notice));
        self
    }

    fn failed(err: &FormError) -> Self {
        tracing::warn!(error = %err, "action failed");
        Self::unchanged().notify(Notice::from(err))
    }
}

pub struct Store {
    state: BuilderState,
}

impl Store {
    pub fn new(state: BuilderState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match self.try_dispatch(action) {
            Ok(result) => result,
            Err(err) => DispatchResult::failed(&err),
        }
    }

    fn try_dispatch(&mut self, action: Action) -> Result<DispatchResult> {
        let result = match action {
            Action::AddField { field_type, at } => {
                let field = self.state.model.add_field(field_type, at);
                self.select_new(field.id)
            }
            Action::AddFieldTag { tag, at } => {
                let field = self.state.model.add_field_tag(&tag, at)?;
                self.select_new(field.id)
            }
            Action::RemoveField(id) => {
                self.state.model.remove_field(id)?;
                self.state.selection.reconcile(self.state.model.document());
                DispatchResult::mutated().notify(Notice::success("Field deleted"))
            }
            Action::UpdateField { id, patch } => {
                self.state.model.update_field(id, patch)?;
                DispatchResult::mutated()
            }
            Action::SetProperty { id, key, input } => match key.patch_from_input(&input) {
                Some(patch) => {
                    self.state.model.update_field(id, patch)?;
                    DispatchResult::mutated()
                }
                None => DispatchResult::unchanged().notify(Notice::warning(format!(
                    "Invalid value for {}: {input}",
                    key.label()
                ))),
            },
            Action::ToggleProperty { id, key } => self.toggle_property(id, key)?,
            Action::MoveField { id, direction } => {
                if self.state.model.move_field(id, direction)? {
                    DispatchResult::mutated()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::DuplicateField(id) => {
                let copy = self.state.model.duplicate_field(id)?;
                self.state.selection.select(self.state.model.document(), copy.id)?;
                DispatchResult::mutated().notify(Notice::success("Field duplicated"))
            }
            Action::AddOption(id) => {
                self.state.model.add_option(id)?;
                DispatchResult::mutated()
            }
            Action::UpdateOption { id, index, patch } => {
                self.state.model.update_option(id, index, patch)?;
                DispatchResult::mutated()
            }
            Action::RemoveOption { id, index } => {
                if self.state.model.remove_option(id, index)? {
                    DispatchResult::mutated()
                } else {
                    DispatchResult::unchanged()
                        .notify(Notice::warning("A field needs at least one option"))
                }
            }
            Action::UpdateForm { title, description } => {
                self.state.model.update_form(title, description);
                DispatchResult::mutated()
            }
            Action::UpdateSettings(patch) => {
                self.state.model.update_settings(patch);
                DispatchResult::mutated()
            }
            Action::Select(Some(id)) => {
                let before = self.state.selection.selected();
                self.state.selection.select(self.state.model.document(), id)?;
                self.changed_if(before != Some(id))
            }
            Action::Select(None) => {
                let changed = self.state.selection.selected().is_some();
                self.state.selection.clear();
                self.changed_if(changed)
            }
            Action::MoveSelection(delta) => {
                let changed = self
                    .state
                    .selection
                    .step(self.state.model.document(), delta);
                self.changed_if(changed)
            }
            Action::Undo => {
                if self.state.model.undo() {
                    self.state.selection.reconcile(self.state.model.document());
                    DispatchResult::mutated()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::Redo => {
                if self.state.model.redo() {
                    self.state.selection.reconcile(self.state.model.document());
                    DispatchResult::mutated()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::Clear => {
                let removed = self.state.model.clear();
                if removed == 0 {
                    DispatchResult::unchanged()
                } else {
                    self.state.selection.reconcile(self.state.model.document());
                    DispatchResult::mutated()
                        .notify(Notice::success(format!("Cleared {removed} field(s)")))
                }
            }
            Action::DragStart(payload) => {
                self.state.drag.start(payload);
                DispatchResult::changed()
            }
            Action::DragOver(target) => {
                let changed = self.state.drag.hover(target);
                self.changed_if(changed)
            }
            Action::Drop => self.finish_drag()?,
            Action::DragEnd => {
                let changed = self.state.drag.end();
                self.changed_if(changed)
            }
            Action::Export {
                format,
                destination,
            } => self.export(format, destination)?,
            Action::Import(json) => {
                let document = export::import_json(&json)?;
                let count = document.len();
                self.state.model.replace_document(document);
                self.state.selection.reconcile(self.state.model.document());
                DispatchResult::mutated()
                    .notify(Notice::success(format!("Imported {count} field(s)")))
            }
            Action::SetViewMode(view) => {
                let changed = self.state.view != view;
                self.state.view = view;
                self.changed_if(changed)
            }
            Action::PaletteQuery(query) => {
                let changed = self.state.palette.query != query;
                self.state.palette.query = query;
                self.changed_if(changed)
            }
            Action::PaletteCategory(category) => {
                let changed = self.state.palette.category != category;
                self.state.palette.category = category;
                self.changed_if(changed)
            }
        };
        Ok(result)
    }

    fn changed_if(&self, changed: bool) -> DispatchResult {
        if changed {
            DispatchResult::changed()
        } else {
            DispatchResult::unchanged()
        }
    }

    fn select_new(&mut self, id: FieldId) -> DispatchResult {
        // 新字段一定在文档里
        let _ = self.state.selection.select(self.state.model.document(), id);
        DispatchResult::mutated().notify(Notice::success("Field added"))
    }

    fn toggle_property(&mut self, id: FieldId, key: PropertyKey) -> Result<DispatchResult> {
        let field = self
            .state
            .model
            .document()
            .field(id)
            .ok_or(FormError::FieldNotFound(id))?;
        match key.toggled(&field.props) {
            Some(patch) => {
                self.state.model.update_field(id, patch)?;
                Ok(DispatchResult::mutated())
            }
            None => Ok(DispatchResult::unchanged()),
        }
    }

    fn finish_drag(&mut self) -> Result<DispatchResult> {
        let Some((payload, Some(target))) = self.state.drag.take() else {
            return Ok(DispatchResult::changed());
        };
        let intent = drop_intent(&payload, target, self.state.model.document());
        match intent {
            Some(DropIntent::Reorder { id, to }) => {
                self.state.model.move_field_to(id, to)?;
                Ok(DispatchResult::mutated())
            }
            Some(DropIntent::Insert { field_type, at }) => {
                let field = self.state.model.add_field(field_type, Some(at));
                Ok(self.select_new(field.id))
            }
            None => Ok(DispatchResult::changed()),
        }
    }

    fn export(
        &self,
        format: ExportFormat,
        destination: ExportDestination,
    ) -> Result<DispatchResult> {
        let document = self.state.model.document();
        let contents = export::export_as(document, format)?;
        let effect = match destination {
            ExportDestination::Directory(dir) => Effect::WriteExport {
                dir,
                file_name: format.file_name(&document.title),
                contents,
            },
            ExportDestination::Clipboard => Effect::SetClipboardText(contents),
        };
        tracing::info!(%format, "export requested");
        Ok(DispatchResult {
            effects: vec![effect],
            state_changed: false,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
