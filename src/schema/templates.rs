//! 每种字段类型的默认属性

use crate::models::{FieldOption, FieldProps};

/// 模板：实例化时整体深拷贝
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTemplate {
    pub props: FieldProps,
    pub options: Vec<FieldOption>,
}

impl FieldTemplate {
    fn props(props: FieldProps) -> Self {
        Self {
            props,
            options: Vec::new(),
        }
    }

    fn with_default_options(mut self) -> Self {
        self.options = (1..=3).map(FieldOption::numbered).collect();
        self
    }
}

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn input(label: &str, placeholder: &str) -> FieldProps {
    FieldProps {
        label: s(label),
        placeholder: s(placeholder),
        required: Some(false),
        default_value: s(""),
        description: s(""),
        ..FieldProps::default()
    }
}

fn choice(label: &str) -> FieldProps {
    FieldProps {
        label: s(label),
        required: Some(false),
        description: s(""),
        ..FieldProps::default()
    }
}

pub(crate) fn text() -> FieldTemplate {
    FieldTemplate::props(input("Text Input", "Enter text..."))
}

pub(crate) fn textarea() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        rows: Some(4),
        ..input("Text Area", "Enter your message...")
    })
}

pub(crate) fn email() -> FieldTemplate {
    FieldTemplate::props(input("Email Address", "you@example.com"))
}

pub(crate) fn number() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        step: Some(1.0),
        ..input("Number", "0")
    })
}

pub(crate) fn select() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        placeholder: s("Choose an option"),
        ..choice("Select Option")
    })
    .with_default_options()
}

pub(crate) fn checkbox() -> FieldTemplate {
    FieldTemplate::props(choice("Checkboxes")).with_default_options()
}

pub(crate) fn radio() -> FieldTemplate {
    FieldTemplate::props(choice("Radio Buttons")).with_default_options()
}

pub(crate) fn date() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        placeholder: None,
        ..input("Date", "")
    })
}

pub(crate) fn file() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        accept: s(""),
        multiple: Some(false),
        ..choice("File Upload")
    })
}

pub(crate) fn range() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        label: s("Range Slider"),
        default_value: s("50"),
        description: s(""),
        min: Some(0.0),
        max: Some(100.0),
        step: Some(1.0),
        ..FieldProps::default()
    })
}

pub(crate) fn color() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        label: s("Color Picker"),
        default_value: s("#6366f1"),
        description: s(""),
        ..FieldProps::default()
    })
}

pub(crate) fn password() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        min_length: Some(8),
        ..input("Password", "Enter password")
    })
}

pub(crate) fn tel() -> FieldTemplate {
    FieldTemplate::props(input("Phone Number", "+1 (555) 000-0000"))
}

pub(crate) fn url() -> FieldTemplate {
    FieldTemplate::props(input("Website", "https://example.com"))
}

pub(crate) fn section() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        title: s("Section Title"),
        description: s("Section description"),
        ..FieldProps::default()
    })
}

pub(crate) fn columns() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        columns: Some(2),
        ..FieldProps::default()
    })
}

pub(crate) fn divider() -> FieldTemplate {
    FieldTemplate::props(FieldProps::default())
}

pub(crate) fn spacer() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        height: Some(20),
        ..FieldProps::default()
    })
}

pub(crate) fn heading() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        text: s("Heading"),
        level: Some(2),
        ..FieldProps::default()
    })
}

pub(crate) fn paragraph() -> FieldTemplate {
    FieldTemplate::props(FieldProps {
        text: s("Enter paragraph text here..."),
        ..FieldProps::default()
    })
}
