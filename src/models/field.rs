//! 字段实例与属性

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field_type::FieldType;

/// 字段 ID：会话内单调递增，删除后不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field_{}", self.0)
    }
}

/// ID 生成器
#[derive(Debug, Clone)]
pub struct FieldIdGen {
    next: u64,
}

impl FieldIdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> FieldId {
        let id = FieldId(self.next);
        self.next += 1;
        id
    }

    /// 跳过已经出现过的 ID（加载持久化文档、导入时）
    pub fn observe(&mut self, id: FieldId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }
}

impl Default for FieldIdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// 字段属性包
///
/// 每个属性都是可选的：模板只设置该类型用到的属性。同一个结构也用作
/// `update_field` 的部分更新，`Some` 的属性覆盖原值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

macro_rules! merge_some {
    ($dst:expr, $src:expr; $($name:ident),+ $(,)?) => {
        $(
            if let Some(v) = $src.$name {
                $dst.$name = Some(v);
            }
        )+
    };
}

impl FieldProps {
    pub fn merge(&mut self, patch: FieldProps) {
        merge_some!(self, patch;
            label, placeholder, required, default_value, description, rows,
            min_length, max_length, pattern, min, max, step, accept, multiple,
            title, text, level, columns, height,
        );
    }

    pub fn is_empty(&self) -> bool {
        *self == FieldProps::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    /// 只对 checkbox 有意义
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            checked: None,
        }
    }

    /// 第 n 个默认选项（从 1 开始）
    pub fn numbered(n: usize) -> Self {
        Self::new(format!("option{n}"), format!("Option {n}"))
    }

    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionPatch {
    pub value: Option<String>,
    pub label: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(flatten)]
    pub props: FieldProps,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl Field {
    pub fn is_choice(&self) -> bool {
        self.field_type.is_choice()
    }

    pub fn is_required(&self) -> bool {
        self.props.required.unwrap_or(false)
    }

    /// 表单控件的 name 属性
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// 画布标题：label，其次 title/text，最后退回类型名
    pub fn display_label(&self) -> &str {
        self.props
            .label
            .as_deref()
            .or(self.props.title.as_deref())
            .or(self.props.text.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(self.field_type.as_str())
    }
}
