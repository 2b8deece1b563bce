use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// 字段类型标签
///
/// 顺序与 `schema::REGISTRY` 中的注册顺序一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Number,
    Select,
    Checkbox,
    Radio,
    Date,
    File,
    Range,
    Color,
    Password,
    Tel,
    Url,
    Section,
    Columns,
    Divider,
    Spacer,
    Heading,
    Paragraph,
}

impl FieldType {
    pub const ALL: [FieldType; 20] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Email,
        FieldType::Number,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Date,
        FieldType::File,
        FieldType::Range,
        FieldType::Color,
        FieldType::Password,
        FieldType::Tel,
        FieldType::Url,
        FieldType::Section,
        FieldType::Columns,
        FieldType::Divider,
        FieldType::Spacer,
        FieldType::Heading,
        FieldType::Paragraph,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Range => "range",
            FieldType::Color => "color",
            FieldType::Password => "password",
            FieldType::Tel => "tel",
            FieldType::Url => "url",
            FieldType::Section => "section",
            FieldType::Columns => "columns",
            FieldType::Divider => "divider",
            FieldType::Spacer => "spacer",
            FieldType::Heading => "heading",
            FieldType::Paragraph => "paragraph",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// 带选项列表的类型
    pub const fn is_choice(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Checkbox | FieldType::Radio)
    }

    /// 纯结构元素，导出 html/react/vue 时不出现在标记中
    pub const fn is_structural(self) -> bool {
        matches!(self, FieldType::Divider | FieldType::Spacer)
    }

    /// 会产生提交值的类型
    pub const fn is_input(self) -> bool {
        !matches!(
            self,
            FieldType::Section
                | FieldType::Columns
                | FieldType::Divider
                | FieldType::Spacer
                | FieldType::Heading
                | FieldType::Paragraph
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        FieldType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| FormError::UnknownFieldType(tag.to_string()))
    }
}

/// 元素面板的分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Basic,
    Choice,
    Advanced,
    Layout,
    Content,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Basic,
        Category::Choice,
        Category::Advanced,
        Category::Layout,
        Category::Content,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Choice => "Choice",
            Category::Advanced => "Advanced",
            Category::Layout => "Layout",
            Category::Content => "Content",
        }
    }
}
