//! 文档模型：所有修改的唯一入口
//!
//! 每个修改操作先校验参数，再记录修改前的快照，最后应用修改。
//! 校验失败时文档和历史都不变。

use crate::error::{FormError, Result};
use crate::models::{
    Field, FieldId, FieldIdGen, FieldOption, FieldProps, FieldType, FormDocument, History,
    MoveDirection, OptionPatch, SettingsPatch,
};
use crate::schema;

const COPY_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, Default)]
pub struct FormModel {
    document: FormDocument,
    history: History<FormDocument>,
    ids: FieldIdGen,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有文档（持久化或导入）开始，ID 生成器跳过文档中的 ID
    pub fn with_document(document: FormDocument) -> Self {
        let mut ids = FieldIdGen::new();
        for id in document.ids() {
            ids.observe(id);
        }
        Self {
            document,
            history: History::default(),
            ids,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn history(&self) -> &History<FormDocument> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn record(&mut self) {
        self.history.record(self.document.clone());
    }

    fn index_of(&self, id: FieldId) -> Result<usize> {
        self.document.position(id).ok_or(FormError::FieldNotFound(id))
    }

    fn choice_field(&self, id: FieldId) -> Result<&Field> {
        let field = self.document.field(id).ok_or(FormError::FieldNotFound(id))?;
        if !field.is_choice() {
            return Err(FormError::NotAChoiceField(id));
        }
        Ok(field)
    }

    fn choice_field_mut(&mut self, id: FieldId) -> Result<&mut Field> {
        self.choice_field(id)?;
        self.document
            .field_mut(id)
            .ok_or(FormError::FieldNotFound(id))
    }

    /// 插入新字段；`at` 超出范围时追加到末尾
    pub fn add_field(&mut self, field_type: FieldType, at: Option<usize>) -> Field {
        let mut field = schema::instantiate(field_type, &mut self.ids);
        if field_type.is_input() && self.document.settings.default_required {
            field.props.required = Some(true);
        }
        self.record();
        let index = at
            .unwrap_or(self.document.len())
            .min(self.document.len());
        self.document.fields.insert(index, field.clone());
        tracing::debug!(id = %field.id, r#type = %field_type, index, "add field");
        field
    }

    pub fn add_field_tag(&mut self, tag: &str, at: Option<usize>) -> Result<Field> {
        let field_type: FieldType = tag.parse()?;
        Ok(self.add_field(field_type, at))
    }

    pub fn remove_field(&mut self, id: FieldId) -> Result<Field> {
        let index = self.index_of(id)?;
        self.record();
        let removed = self.document.fields.remove(index);
        tracing::debug!(id = %id, index, "remove field");
        Ok(removed)
    }

    /// 合并属性：patch 中出现的属性覆盖原值
    pub fn update_field(&mut self, id: FieldId, patch: FieldProps) -> Result<()> {
        let index = self.index_of(id)?;
        self.record();
        self.document.fields[index].props.merge(patch);
        tracing::debug!(id = %id, "update field");
        Ok(())
    }

    /// 返回字段是否真的移动了；到达边界时什么都不做，也不记录历史
    pub fn move_field(&mut self, id: FieldId, direction: MoveDirection) -> Result<bool> {
        let index = self.index_of(id)?;
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.document.len() => index + 1,
            _ => return Ok(false),
        };
        self.record();
        self.document.fields.swap(index, target);
        tracing::debug!(id = %id, from = index, to = target, "move field");
        Ok(true)
    }

    /// 拖放重排：把字段移动到 `to`（按移除后的序列计算，超出时落在末尾）
    pub fn move_field_to(&mut self, id: FieldId, to: usize) -> Result<bool> {
        let from = self.index_of(id)?;
        let to = to.min(self.document.len() - 1);
        if from == to {
            return Ok(false);
        }
        self.record();
        let field = self.document.fields.remove(from);
        self.document.fields.insert(to, field);
        tracing::debug!(id = %id, from, to, "reorder field");
        Ok(true)
    }

    pub fn duplicate_field(&mut self, id: FieldId) -> Result<Field> {
        let index = self.index_of(id)?;
        let mut copy = self.document.fields[index].clone();
        copy.id = self.ids.next_id();
        // 没有 label 的布局字段在 title / text 上加后缀
        let props = &mut copy.props;
        if let Some(name) = [&mut props.label, &mut props.title, &mut props.text]
            .into_iter()
            .find_map(Option::as_mut)
        {
            name.push_str(COPY_SUFFIX);
        }
        self.record();
        self.document.fields.insert(index + 1, copy.clone());
        tracing::debug!(id = %id, copy = %copy.id, "duplicate field");
        Ok(copy)
    }

    pub fn add_option(&mut self, id: FieldId) -> Result<FieldOption> {
        let n = self.choice_field(id)?.options.len() + 1;
        let option = FieldOption::numbered(n);
        self.record();
        self.choice_field_mut(id)?.options.push(option.clone());
        tracing::debug!(id = %id, n, "add option");
        Ok(option)
    }

    pub fn update_option(&mut self, id: FieldId, index: usize, patch: OptionPatch) -> Result<()> {
        let field = self.choice_field(id)?;
        if index >= field.options.len() {
            return Err(FormError::OptionNotFound { field: id, index });
        }
        let checkable = field.field_type == FieldType::Checkbox;
        self.record();
        let option = &mut self.choice_field_mut(id)?.options[index];
        if let Some(value) = patch.value {
            option.value = value;
        }
        if let Some(label) = patch.label {
            option.label = label;
        }
        if let Some(checked) = patch.checked.filter(|_| checkable) {
            option.checked = Some(checked);
        }
        tracing::debug!(id = %id, index, "update option");
        Ok(())
    }

    /// 只剩一个选项时什么都不做，返回 `false`
    pub fn remove_option(&mut self, id: FieldId, index: usize) -> Result<bool> {
        let len = self.choice_field(id)?.options.len();
        if index >= len {
            return Err(FormError::OptionNotFound { field: id, index });
        }
        if len <= 1 {
            return Ok(false);
        }
        self.record();
        self.choice_field_mut(id)?.options.remove(index);
        tracing::debug!(id = %id, index, "remove option");
        Ok(true)
    }

    pub fn update_form(&mut self, title: Option<String>, description: Option<String>) {
        if title.is_none() && description.is_none() {
            return;
        }
        self.record();
        if let Some(title) = title {
            self.document.title = title;
        }
        if let Some(description) = description {
            self.document.description = description;
        }
        tracing::debug!("update form");
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.record();
        self.document.settings.apply(patch);
        tracing::debug!("update settings");
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.document) {
            Some(previous) => {
                self.document = previous;
                tracing::debug!(depth = self.history.undo_depth(), "undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.document = next;
                tracing::debug!(depth = self.history.redo_depth(), "redo");
                true
            }
            None => false,
        }
    }

    /// 清空字段并返回清掉的数量；空文档上什么都不做
    pub fn clear(&mut self) -> usize {
        let removed = self.document.len();
        if removed == 0 {
            return 0;
        }
        self.record();
        self.document.fields.clear();
        tracing::debug!(removed, "clear fields");
        removed
    }

    /// 整体替换文档（导入），记录历史
    pub fn replace_document(&mut self, document: FormDocument) {
        for id in document.ids() {
            self.ids.observe(id);
        }
        self.record();
        self.document = document;
        tracing::debug!(fields = self.document.len(), "replace document");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/model.rs"]
mod tests;
