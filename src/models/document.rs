use serde::{Deserialize, Serialize};

use super::field::{Field, FieldId};
use super::settings::FormSettings;

pub const DEFAULT_TITLE: &str = "Untitled Form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// 一个表单的完整可编辑状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub settings: FormSettings,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for FormDocument {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            fields: Vec::new(),
            settings: FormSettings::default(),
        }
    }
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(|f| f.id)
    }
}
