//! 拖放规则：面板元素插入画布、画布字段重排

use crate::models::{FieldId, FieldType, FormDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    CanvasField { id: FieldId },
    PaletteItem { field_type: FieldType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// 画布上第 `index` 个块所在的位置
    CanvasSlot { index: usize },
    CanvasEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIntent {
    Reorder { id: FieldId, to: usize },
    Insert { field_type: FieldType, at: usize },
}

pub fn drop_intent(
    payload: &DragPayload,
    target: DropTarget,
    document: &FormDocument,
) -> Option<DropIntent> {
    match (*payload, target) {
        (DragPayload::CanvasField { id }, target) => {
            let from = document.position(id)?;
            let to = match target {
                DropTarget::CanvasSlot { index } => index.min(document.len() - 1),
                DropTarget::CanvasEnd => document.len() - 1,
            };
            (from != to).then_some(DropIntent::Reorder { id, to })
        }
        (DragPayload::PaletteItem { field_type }, DropTarget::CanvasSlot { index }) => {
            Some(DropIntent::Insert {
                field_type,
                at: index.min(document.len()),
            })
        }
        (DragPayload::PaletteItem { field_type }, DropTarget::CanvasEnd) => {
            Some(DropIntent::Insert {
                field_type,
                at: document.len(),
            })
        }
    }
}

/// dragstart/dragover/drop/dragend 之间的状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    payload: Option<DragPayload>,
    over: Option<DropTarget>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    pub fn over(&self) -> Option<DropTarget> {
        self.over
    }

    pub fn start(&mut self, payload: DragPayload) {
        self.payload = Some(payload);
        self.over = None;
    }

    /// 没有进行中的拖动时忽略
    pub fn hover(&mut self, target: DropTarget) -> bool {
        if self.payload.is_none() || self.over == Some(target) {
            return false;
        }
        self.over = Some(target);
        true
    }

    /// 取出拖动内容并结束拖动
    pub fn take(&mut self) -> Option<(DragPayload, Option<DropTarget>)> {
        let over = self.over.take();
        self.payload.take().map(|p| (p, over))
    }

    /// dragend：无论是否放下都清空
    pub fn end(&mut self) -> bool {
        let was = self.is_dragging();
        self.payload = None;
        self.over = None;
        was
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dnd.rs"]
mod tests;
