use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Minimal,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Minimal];

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Minimal => "minimal",
        }
    }

    /// 导出 HTML 使用的配色
    pub const fn palette(self) -> ThemePalette {
        match self {
            Theme::Light => ThemePalette {
                background: "#ffffff",
                foreground: "#1f2937",
                border: "#d1d5db",
                accent: "#6366f1",
            },
            Theme::Dark => ThemePalette {
                background: "#1f2937",
                foreground: "#f9fafb",
                border: "#4b5563",
                accent: "#818cf8",
            },
            Theme::Minimal => ThemePalette {
                background: "#ffffff",
                foreground: "#111111",
                border: "#111111",
                accent: "#111111",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitAction {
    #[default]
    Message,
    Redirect,
    Email,
}

impl SubmitAction {
    pub const ALL: [SubmitAction; 3] = [
        SubmitAction::Message,
        SubmitAction::Redirect,
        SubmitAction::Email,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SubmitAction::Message => "message",
            SubmitAction::Redirect => "redirect",
            SubmitAction::Email => "email",
        }
    }
}

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your submission!";

/// 表单级设置
///
/// 缺失的键使用默认值，旧版本保存的文档也能加载。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub theme: Theme,
    pub width: u32,
    pub show_labels: bool,
    pub show_placeholders: bool,
    pub padding: u32,
    pub spacing: u32,
    pub border_radius: u32,
    pub validation: bool,
    pub default_required: bool,
    pub submit_action: SubmitAction,
    pub success_message: String,
    pub redirect_url: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            width: 600,
            show_labels: true,
            show_placeholders: true,
            padding: 24,
            spacing: 16,
            border_radius: 8,
            validation: true,
            default_required: false,
            submit_action: SubmitAction::Message,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            redirect_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub width: Option<u32>,
    pub show_labels: Option<bool>,
    pub show_placeholders: Option<bool>,
    pub padding: Option<u32>,
    pub spacing: Option<u32>,
    pub border_radius: Option<u32>,
    pub validation: Option<bool>,
    pub default_required: Option<bool>,
    pub submit_action: Option<SubmitAction>,
    pub success_message: Option<String>,
    pub redirect_url: Option<String>,
}

impl FormSettings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.width {
            self.width = v;
        }
        if let Some(v) = patch.show_labels {
            self.show_labels = v;
        }
        if let Some(v) = patch.show_placeholders {
            self.show_placeholders = v;
        }
        if let Some(v) = patch.padding {
            self.padding = v;
        }
        if let Some(v) = patch.spacing {
            self.spacing = v;
        }
        if let Some(v) = patch.border_radius {
            self.border_radius = v;
        }
        if let Some(v) = patch.validation {
            self.validation = v;
        }
        if let Some(v) = patch.default_required {
            self.default_required = v;
        }
        if let Some(v) = patch.submit_action {
            self.submit_action = v;
        }
        if let Some(v) = patch.success_message {
            self.success_message = v;
        }
        if let Some(v) = patch.redirect_url {
            self.redirect_url = v;
        }
    }
}
