use crate::models::{Category, FormDocument};
use crate::schema::{self, FieldTypeSpec};

use super::dnd::DragState;
use super::model::FormModel;
use super::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Canvas,
    Preview,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Canvas => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Canvas,
        }
    }
}

/// 元素面板的搜索词和分组
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub query: String,
    pub category: Option<Category>,
}

impl PaletteState {
    pub fn items(&self) -> Vec<&'static FieldTypeSpec> {
        schema::palette(self.category, &self.query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    pub model: FormModel,
    pub selection: Selection,
    pub drag: DragState,
    pub view: ViewMode,
    pub palette: PaletteState,
}

impl BuilderState {
    pub fn new(model: FormModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &FormDocument {
        self.model.document()
    }
}
