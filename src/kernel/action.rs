use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::models::{
    Category, FieldId, FieldProps, FieldType, MoveDirection, OptionPatch, SettingsPatch,
};
use crate::schema::PropertyKey;

use super::dnd::{DragPayload, DropTarget};
use super::state::ViewMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDestination {
    Directory(PathBuf),
    Clipboard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddField {
        field_type: FieldType,
        at: Option<usize>,
    },
    /// 按类型标签添加（外部输入，可能是未注册的类型）
    AddFieldTag {
        tag: String,
        at: Option<usize>,
    },
    RemoveField(FieldId),
    UpdateField {
        id: FieldId,
        patch: FieldProps,
    },
    /// 属性面板里输入的原始文本
    SetProperty {
        id: FieldId,
        key: PropertyKey,
        input: String,
    },
    ToggleProperty {
        id: FieldId,
        key: PropertyKey,
    },
    MoveField {
        id: FieldId,
        direction: MoveDirection,
    },
    DuplicateField(FieldId),
    AddOption(FieldId),
    UpdateOption {
        id: FieldId,
        index: usize,
        patch: OptionPatch,
    },
    RemoveOption {
        id: FieldId,
        index: usize,
    },
    UpdateForm {
        title: Option<String>,
        description: Option<String>,
    },
    UpdateSettings(SettingsPatch),
    Select(Option<FieldId>),
    MoveSelection(isize),
    Undo,
    Redo,
    Clear,
    DragStart(DragPayload),
    DragOver(DropTarget),
    Drop,
    DragEnd,
    Export {
        format: ExportFormat,
        destination: ExportDestination,
    },
    Import(String),
    SetViewMode(ViewMode),
    PaletteQuery(String),
    PaletteCategory(Option<Category>),
}
