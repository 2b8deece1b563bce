//! 只读预览：最终用户看到的表单

use crate::models::{FieldId, FormDocument, FormSettings, SubmitAction};
use crate::schema::widget_for;

use super::widget::Widget;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    pub field_id: FieldId,
    /// `show_labels` 关闭或字段没有标签时为 `None`
    pub label: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub widget: Widget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTree {
    pub title: String,
    pub description: String,
    pub items: Vec<PreviewItem>,
    pub submit_label: &'static str,
    pub submit_action: SubmitAction,
    pub success_message: String,
    pub width: u32,
}

pub const SUBMIT_LABEL: &str = "Submit";

pub fn render_preview(document: &FormDocument) -> PreviewTree {
    let settings = &document.settings;
    let items = document
        .fields
        .iter()
        .map(|field| {
            let widget = preview_widget(widget_for(field), settings);
            let labelled = field.field_type.is_input();
            PreviewItem {
                field_id: field.id,
                label: field
                    .props
                    .label
                    .clone()
                    .filter(|l| labelled && settings.show_labels && !l.is_empty()),
                description: field
                    .props
                    .description
                    .clone()
                    .filter(|d| labelled && !d.is_empty()),
                required: widget.is_required(),
                widget,
            }
        })
        .collect();

    PreviewTree {
        title: document.title.clone(),
        description: document.description.clone(),
        items,
        submit_label: SUBMIT_LABEL,
        submit_action: settings.submit_action,
        success_message: settings.success_message.clone(),
        width: settings.width,
    }
}

/// 按表单设置调整控件：占位文本、原生校验
pub(crate) fn preview_widget(widget: Widget, settings: &FormSettings) -> Widget {
    let widget = if settings.show_placeholders {
        widget
    } else {
        widget.without_placeholder()
    };
    if settings.validation {
        widget
    } else {
        widget.without_required()
    }
}
