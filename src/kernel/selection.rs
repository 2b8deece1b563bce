//! 选中状态与属性面板

use crate::error::{FormError, Result};
use crate::models::{Field, FieldId, FieldType, FormDocument};
use crate::schema::{self, EditorKind, PropertyKey};

/// 当前选中的字段；只保存 ID，属性总是从文档里现取
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<FieldId>,
}

impl Selection {
    pub fn selected(&self) -> Option<FieldId> {
        self.selected
    }

    pub fn select(&mut self, document: &FormDocument, id: FieldId) -> Result<()> {
        if !document.contains(id) {
            return Err(FormError::FieldNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// 选中的字段已经不在文档里（删除、撤销、清空之后）就取消选中。
    /// 返回选中状态是否变化。
    pub fn reconcile(&mut self, document: &FormDocument) -> bool {
        match self.selected {
            Some(id) if !document.contains(id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }

    /// 在字段列表中上下移动选中项；没有选中时从头或尾开始
    pub fn step(&mut self, document: &FormDocument, delta: isize) -> bool {
        if document.is_empty() {
            return false;
        }
        let last = document.len() - 1;
        let next = match self.selected.and_then(|id| document.position(id)) {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None if delta < 0 => last,
            None => 0,
        };
        let id = document.fields[next].id;
        let changed = self.selected != Some(id);
        self.selected = Some(id);
        changed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEditor {
    pub key: PropertyKey,
    pub label: &'static str,
    pub kind: EditorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    pub field_id: FieldId,
    pub field_type: FieldType,
    pub editors: Vec<PropertyEditor>,
    /// choice 字段额外显示选项列表编辑器
    pub options_editor: bool,
}

pub fn properties_for(field: &Field) -> PropertySchema {
    let editors = schema::spec_for(field.field_type)
        .properties
        .iter()
        .map(|&key| PropertyEditor {
            key,
            label: key.label(),
            kind: key.editor(),
        })
        .collect();
    PropertySchema {
        field_id: field.id,
        field_type: field.field_type,
        editors,
        options_editor: field.is_choice(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/selection.rs"]
mod tests;
