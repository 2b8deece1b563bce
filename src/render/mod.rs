//! 渲染层：把表单文档投影成画布树和预览树，不修改文档。

pub mod canvas;
pub mod preview;
pub mod widget;

pub use canvas::{render_canvas, BlockControls, BlockHeader, CanvasBlock, CanvasTree};
pub use preview::{render_preview, PreviewItem, PreviewTree};
pub use widget::{
    BindingValue, ChoiceWidget, Constraints, FileWidget, InputWidget, RangeWidget,
    TextAreaWidget, Widget,
};

#[cfg(test)]
#[path = "../../tests/unit/render/tree.rs"]
mod tests;
