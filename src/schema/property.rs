//! 属性面板可编辑的属性

use crate::models::FieldProps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Label,
    Placeholder,
    DefaultValue,
    Description,
    Required,
    Rows,
    MinLength,
    MaxLength,
    Pattern,
    Min,
    Max,
    Step,
    Accept,
    Multiple,
    Title,
    Text,
    Level,
    Columns,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Text,
    TextArea,
    Number,
    Toggle,
    Choice(&'static [&'static str]),
}

const HEADING_LEVELS: &[&str] = &["1", "2", "3", "4", "5", "6"];
const COLUMN_COUNTS: &[&str] = &["2", "3", "4"];

/// 属性的当前值（用于显示）
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(Option<f64>),
    Toggle(bool),
}

impl PropertyKey {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyKey::Label => "Label",
            PropertyKey::Placeholder => "Placeholder",
            PropertyKey::DefaultValue => "Default Value",
            PropertyKey::Description => "Help Text",
            PropertyKey::Required => "Required",
            PropertyKey::Rows => "Rows",
            PropertyKey::MinLength => "Min Length",
            PropertyKey::MaxLength => "Max Length",
            PropertyKey::Pattern => "Pattern",
            PropertyKey::Min => "Min",
            PropertyKey::Max => "Max",
            PropertyKey::Step => "Step",
            PropertyKey::Accept => "Accepted Types",
            PropertyKey::Multiple => "Multiple Files",
            PropertyKey::Title => "Title",
            PropertyKey::Text => "Text",
            PropertyKey::Level => "Level",
            PropertyKey::Columns => "Columns",
            PropertyKey::Height => "Height (px)",
        }
    }

    pub const fn editor(self) -> EditorKind {
        match self {
            PropertyKey::Required | PropertyKey::Multiple => EditorKind::Toggle,
            PropertyKey::Rows
            | PropertyKey::MinLength
            | PropertyKey::MaxLength
            | PropertyKey::Min
            | PropertyKey::Max
            | PropertyKey::Step
            | PropertyKey::Height => EditorKind::Number,
            PropertyKey::Level => EditorKind::Choice(HEADING_LEVELS),
            PropertyKey::Columns => EditorKind::Choice(COLUMN_COUNTS),
            PropertyKey::Description | PropertyKey::Text => EditorKind::TextArea,
            PropertyKey::Label
            | PropertyKey::Placeholder
            | PropertyKey::DefaultValue
            | PropertyKey::Pattern
            | PropertyKey::Accept
            | PropertyKey::Title => EditorKind::Text,
        }
    }

    pub fn read(self, props: &FieldProps) -> PropertyValue {
        let text = |v: &Option<String>| PropertyValue::Text(v.clone().unwrap_or_default());
        let num_u32 = |v: Option<u32>| PropertyValue::Number(v.map(f64::from));
        match self {
            PropertyKey::Label => text(&props.label),
            PropertyKey::Placeholder => text(&props.placeholder),
            PropertyKey::DefaultValue => text(&props.default_value),
            PropertyKey::Description => text(&props.description),
            PropertyKey::Pattern => text(&props.pattern),
            PropertyKey::Accept => text(&props.accept),
            PropertyKey::Title => text(&props.title),
            PropertyKey::Text => text(&props.text),
            PropertyKey::Required => PropertyValue::Toggle(props.required.unwrap_or(false)),
            PropertyKey::Multiple => PropertyValue::Toggle(props.multiple.unwrap_or(false)),
            PropertyKey::Rows => num_u32(props.rows),
            PropertyKey::MinLength => num_u32(props.min_length),
            PropertyKey::MaxLength => num_u32(props.max_length),
            PropertyKey::Height => num_u32(props.height),
            PropertyKey::Min => PropertyValue::Number(props.min),
            PropertyKey::Max => PropertyValue::Number(props.max),
            PropertyKey::Step => PropertyValue::Number(props.step),
            PropertyKey::Level => PropertyValue::Number(props.level.map(f64::from)),
            PropertyKey::Columns => PropertyValue::Number(props.columns.map(f64::from)),
        }
    }

    /// 把输入框中的文本解析成部分更新；数字解析失败返回 `None`
    pub fn patch_from_input(self, input: &str) -> Option<FieldProps> {
        let mut patch = FieldProps::default();
        let trimmed = input.trim();
        match self {
            PropertyKey::Label => patch.label = Some(input.to_string()),
            PropertyKey::Placeholder => patch.placeholder = Some(input.to_string()),
            PropertyKey::DefaultValue => patch.default_value = Some(input.to_string()),
            PropertyKey::Description => patch.description = Some(input.to_string()),
            PropertyKey::Pattern => patch.pattern = Some(input.to_string()),
            PropertyKey::Accept => patch.accept = Some(input.to_string()),
            PropertyKey::Title => patch.title = Some(input.to_string()),
            PropertyKey::Text => patch.text = Some(input.to_string()),
            PropertyKey::Required => patch.required = Some(parse_toggle(trimmed)?),
            PropertyKey::Multiple => patch.multiple = Some(parse_toggle(trimmed)?),
            PropertyKey::Rows => patch.rows = Some(trimmed.parse().ok()?),
            PropertyKey::MinLength => patch.min_length = Some(trimmed.parse().ok()?),
            PropertyKey::MaxLength => patch.max_length = Some(trimmed.parse().ok()?),
            PropertyKey::Height => patch.height = Some(trimmed.parse().ok()?),
            PropertyKey::Min => patch.min = Some(parse_finite(trimmed)?),
            PropertyKey::Max => patch.max = Some(parse_finite(trimmed)?),
            PropertyKey::Step => patch.step = Some(parse_finite(trimmed)?),
            PropertyKey::Level => {
                let level = trimmed.parse::<u8>().ok()?;
                patch.level = Some(level).filter(|l| (1..=6).contains(l));
                patch.level?;
            }
            PropertyKey::Columns => {
                let columns = trimmed.parse::<u8>().ok()?;
                patch.columns = Some(columns).filter(|c| (2..=4).contains(c));
                patch.columns?;
            }
        }
        Some(patch)
    }

    /// 布尔属性取反的部分更新
    pub fn toggled(self, props: &FieldProps) -> Option<FieldProps> {
        let mut patch = FieldProps::default();
        match self {
            PropertyKey::Required => patch.required = Some(!props.required.unwrap_or(false)),
            PropertyKey::Multiple => patch.multiple = Some(!props.multiple.unwrap_or(false)),
            _ => return None,
        }
        Some(patch)
    }
}

fn parse_toggle(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
