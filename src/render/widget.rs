//! 字段到控件的映射
//!
//! 画布、预览和所有导出器都从这里取控件，保证同一字段在各处的表现一致。

use crate::models::{Field, FieldOption};

/// 输入约束（原生校验属性）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub pattern: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl Constraints {
    fn of(field: &Field) -> Self {
        let p = &field.props;
        Self {
            min_length: p.min_length,
            max_length: p.max_length,
            pattern: non_empty(&p.pattern),
            min: p.min,
            max: p.max,
            step: p.step,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Constraints::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputWidget {
    /// HTML input type
    pub input_type: &'static str,
    pub name: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub required: bool,
    pub constraints: Constraints,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaWidget {
    pub name: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub rows: u32,
    pub required: bool,
    pub constraints: Constraints,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceWidget {
    pub name: String,
    pub placeholder: Option<String>,
    pub options: Vec<FieldOption>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeWidget {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileWidget {
    pub name: String,
    pub accept: Option<String>,
    pub multiple: bool,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Input(InputWidget),
    TextArea(TextAreaWidget),
    Select(ChoiceWidget),
    CheckboxGroup(ChoiceWidget),
    RadioGroup(ChoiceWidget),
    Range(RangeWidget),
    File(FileWidget),
    Section { title: String, description: String },
    Columns { count: u8 },
    Divider,
    Spacer { height: u32 },
    Heading { level: u8, text: String },
    Paragraph { text: String },
}

/// 控件产生的值的形状（react/vue 状态绑定用）
#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    Text(String),
    Number(f64),
    /// checkbox 组：选中的选项值
    List(Vec<String>),
    File,
}

impl Widget {
    pub fn name(&self) -> Option<&str> {
        match self {
            Widget::Input(w) => Some(&w.name),
            Widget::TextArea(w) => Some(&w.name),
            Widget::Select(w) | Widget::CheckboxGroup(w) | Widget::RadioGroup(w) => Some(&w.name),
            Widget::Range(w) => Some(&w.name),
            Widget::File(w) => Some(&w.name),
            _ => None,
        }
    }

    /// divider/spacer：只占位，不进入导出的标记
    pub fn is_structural(&self) -> bool {
        matches!(self, Widget::Divider | Widget::Spacer { .. })
    }

    pub fn is_required(&self) -> bool {
        match self {
            Widget::Input(w) => w.required,
            Widget::TextArea(w) => w.required,
            Widget::Select(w) | Widget::CheckboxGroup(w) | Widget::RadioGroup(w) => w.required,
            Widget::File(w) => w.required,
            _ => false,
        }
    }

    /// 受控绑定的初始值；不产生值的控件返回 `None`
    pub fn binding(&self) -> Option<BindingValue> {
        match self {
            Widget::Input(w) if w.input_type == "number" => Some(
                w.value
                    .as_deref()
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .map(BindingValue::Number)
                    .unwrap_or_else(|| BindingValue::Text(String::new())),
            ),
            Widget::Input(w) => Some(BindingValue::Text(w.value.clone().unwrap_or_default())),
            Widget::TextArea(w) => Some(BindingValue::Text(w.value.clone().unwrap_or_default())),
            Widget::Select(_) | Widget::RadioGroup(_) => Some(BindingValue::Text(String::new())),
            Widget::CheckboxGroup(w) => Some(BindingValue::List(
                w.options
                    .iter()
                    .filter(|o| o.is_checked())
                    .map(|o| o.value.clone())
                    .collect(),
            )),
            Widget::Range(w) => Some(BindingValue::Number(w.value)),
            Widget::File(_) => Some(BindingValue::File),
            _ => None,
        }
    }

    /// 去掉占位文本（预览里关闭 show_placeholders 时）
    pub fn without_placeholder(mut self) -> Self {
        match &mut self {
            Widget::Input(w) => w.placeholder = None,
            Widget::TextArea(w) => w.placeholder = None,
            Widget::Select(w) => w.placeholder = None,
            _ => {}
        }
        self
    }

    /// 关闭原生 required 校验
    pub fn without_required(mut self) -> Self {
        match &mut self {
            Widget::Input(w) => w.required = false,
            Widget::TextArea(w) => w.required = false,
            Widget::Select(w) | Widget::CheckboxGroup(w) | Widget::RadioGroup(w) => {
                w.required = false
            }
            Widget::File(w) => w.required = false,
            _ => {}
        }
        self
    }
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// 每种字段类型的投影函数，由 `schema::REGISTRY` 引用
pub(crate) mod project {
    use super::*;

    fn input(field: &Field, input_type: &'static str) -> Widget {
        Widget::Input(InputWidget {
            input_type,
            name: field.name(),
            placeholder: non_empty(&field.props.placeholder),
            value: non_empty(&field.props.default_value),
            required: field.is_required(),
            constraints: Constraints::of(field),
        })
    }

    fn choice(field: &Field) -> ChoiceWidget {
        ChoiceWidget {
            name: field.name(),
            placeholder: non_empty(&field.props.placeholder),
            options: field.options.clone(),
            required: field.is_required(),
        }
    }

    pub(crate) fn text(field: &Field) -> Widget {
        input(field, "text")
    }

    pub(crate) fn email(field: &Field) -> Widget {
        input(field, "email")
    }

    pub(crate) fn number(field: &Field) -> Widget {
        input(field, "number")
    }

    pub(crate) fn date(field: &Field) -> Widget {
        input(field, "date")
    }

    pub(crate) fn color(field: &Field) -> Widget {
        input(field, "color")
    }

    pub(crate) fn password(field: &Field) -> Widget {
        input(field, "password")
    }

    pub(crate) fn tel(field: &Field) -> Widget {
        input(field, "tel")
    }

    pub(crate) fn url(field: &Field) -> Widget {
        input(field, "url")
    }

    pub(crate) fn textarea(field: &Field) -> Widget {
        Widget::TextArea(TextAreaWidget {
            name: field.name(),
            placeholder: non_empty(&field.props.placeholder),
            value: non_empty(&field.props.default_value),
            rows: field.props.rows.unwrap_or(4).max(1),
            required: field.is_required(),
            constraints: Constraints::of(field),
        })
    }

    pub(crate) fn select(field: &Field) -> Widget {
        Widget::Select(choice(field))
    }

    pub(crate) fn checkbox(field: &Field) -> Widget {
        Widget::CheckboxGroup(choice(field))
    }

    pub(crate) fn radio(field: &Field) -> Widget {
        let mut w = choice(field);
        // checked 只对 checkbox 生效
        for opt in &mut w.options {
            opt.checked = None;
        }
        Widget::RadioGroup(w)
    }

    pub(crate) fn range(field: &Field) -> Widget {
        let p = &field.props;
        let min = p.min.unwrap_or(0.0);
        let max = p.max.unwrap_or(100.0).max(min);
        let value = p
            .default_value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or((min + max) / 2.0)
            .clamp(min, max);
        Widget::Range(RangeWidget {
            name: field.name(),
            min,
            max,
            step: p.step.filter(|s| *s > 0.0).unwrap_or(1.0),
            value,
        })
    }

    pub(crate) fn file(field: &Field) -> Widget {
        Widget::File(FileWidget {
            name: field.name(),
            accept: non_empty(&field.props.accept),
            multiple: field.props.multiple.unwrap_or(false),
            required: field.is_required(),
        })
    }

    pub(crate) fn section(field: &Field) -> Widget {
        Widget::Section {
            title: field.props.title.clone().unwrap_or_default(),
            description: field.props.description.clone().unwrap_or_default(),
        }
    }

    pub(crate) fn columns(field: &Field) -> Widget {
        Widget::Columns {
            count: field.props.columns.unwrap_or(2).clamp(1, 4),
        }
    }

    pub(crate) fn divider(_field: &Field) -> Widget {
        Widget::Divider
    }

    pub(crate) fn spacer(field: &Field) -> Widget {
        Widget::Spacer {
            height: field.props.height.unwrap_or(20),
        }
    }

    pub(crate) fn heading(field: &Field) -> Widget {
        Widget::Heading {
            level: field.props.level.unwrap_or(2).clamp(1, 6),
            text: field.props.text.clone().unwrap_or_default(),
        }
    }

    pub(crate) fn paragraph(field: &Field) -> Widget {
        Widget::Paragraph {
            text: field.props.text.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/widget.rs"]
mod tests;
