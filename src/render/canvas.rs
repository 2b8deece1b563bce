//! 构建器画布：可编辑的字段块

use crate::models::{FieldId, FieldType, FormDocument};
use crate::schema::{spec_for, widget_for};

use super::widget::Widget;

#[derive(Debug, Clone, PartialEq)]
pub struct BlockHeader {
    pub title: String,
    pub type_name: &'static str,
    pub icon: &'static str,
    pub required: bool,
}

/// 每个字段块上的编辑按钮；`false` 表示禁用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockControls {
    pub move_up: bool,
    pub move_down: bool,
    pub duplicate: bool,
    pub delete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasBlock {
    pub field_id: FieldId,
    pub field_type: FieldType,
    pub header: BlockHeader,
    pub controls: BlockControls,
    pub selected: bool,
    /// 拖拽源；放下的位置就是块的序号
    pub draggable: bool,
    pub widget: Widget,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasTree {
    pub title: String,
    pub description: String,
    pub blocks: Vec<CanvasBlock>,
}

impl CanvasTree {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, id: FieldId) -> Option<&CanvasBlock> {
        self.blocks.iter().find(|b| b.field_id == id)
    }
}

pub fn render_canvas(document: &FormDocument, selected: Option<FieldId>) -> CanvasTree {
    let last = document.len().saturating_sub(1);
    let blocks = document
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let spec = spec_for(field.field_type);
            CanvasBlock {
                field_id: field.id,
                field_type: field.field_type,
                header: BlockHeader {
                    title: field.display_label().to_string(),
                    type_name: spec.name,
                    icon: spec.icon,
                    required: field.field_type.is_input() && field.is_required(),
                },
                controls: BlockControls {
                    move_up: index > 0,
                    move_down: index < last,
                    duplicate: true,
                    delete: true,
                },
                selected: selected == Some(field.id),
                draggable: true,
                widget: widget_for(field),
            }
        })
        .collect();

    CanvasTree {
        title: document.title.clone(),
        description: document.description.clone(),
        blocks,
    }
}
