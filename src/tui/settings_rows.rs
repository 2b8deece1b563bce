//! 没有选中字段时，属性面板编辑表单设置

use crate::models::{FormSettings, SettingsPatch, SubmitAction, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Theme,
    Width,
    ShowLabels,
    ShowPlaceholders,
    Padding,
    Spacing,
    BorderRadius,
    Validation,
    DefaultRequired,
    SubmitAction,
    SuccessMessage,
    RedirectUrl,
}

impl SettingKey {
    pub const ALL: [SettingKey; 12] = [
        SettingKey::Theme,
        SettingKey::Width,
        SettingKey::ShowLabels,
        SettingKey::ShowPlaceholders,
        SettingKey::Padding,
        SettingKey::Spacing,
        SettingKey::BorderRadius,
        SettingKey::Validation,
        SettingKey::DefaultRequired,
        SettingKey::SubmitAction,
        SettingKey::SuccessMessage,
        SettingKey::RedirectUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingKey::Theme => "Theme",
            SettingKey::Width => "Width (px)",
            SettingKey::ShowLabels => "Show Labels",
            SettingKey::ShowPlaceholders => "Show Placeholders",
            SettingKey::Padding => "Padding (px)",
            SettingKey::Spacing => "Spacing (px)",
            SettingKey::BorderRadius => "Border Radius (px)",
            SettingKey::Validation => "Validation",
            SettingKey::DefaultRequired => "Required by Default",
            SettingKey::SubmitAction => "On Submit",
            SettingKey::SuccessMessage => "Success Message",
            SettingKey::RedirectUrl => "Redirect URL",
        }
    }

    pub fn value(self, s: &FormSettings) -> String {
        let flag = |b: bool| if b { "on" } else { "off" }.to_string();
        match self {
            SettingKey::Theme => s.theme.as_str().to_string(),
            SettingKey::Width => s.width.to_string(),
            SettingKey::ShowLabels => flag(s.show_labels),
            SettingKey::ShowPlaceholders => flag(s.show_placeholders),
            SettingKey::Padding => s.padding.to_string(),
            SettingKey::Spacing => s.spacing.to_string(),
            SettingKey::BorderRadius => s.border_radius.to_string(),
            SettingKey::Validation => flag(s.validation),
            SettingKey::DefaultRequired => flag(s.default_required),
            SettingKey::SubmitAction => s.submit_action.as_str().to_string(),
            SettingKey::SuccessMessage => s.success_message.clone(),
            SettingKey::RedirectUrl => s.redirect_url.clone(),
        }
    }

    /// 开关和枚举项直接切换，不需要输入框
    pub fn cycled(self, s: &FormSettings) -> Option<SettingsPatch> {
        let mut patch = SettingsPatch::default();
        match self {
            SettingKey::Theme => patch.theme = Some(next(&Theme::ALL, s.theme)),
            SettingKey::SubmitAction => {
                patch.submit_action = Some(next(&SubmitAction::ALL, s.submit_action))
            }
            SettingKey::ShowLabels => patch.show_labels = Some(!s.show_labels),
            SettingKey::ShowPlaceholders => patch.show_placeholders = Some(!s.show_placeholders),
            SettingKey::Validation => patch.validation = Some(!s.validation),
            SettingKey::DefaultRequired => patch.default_required = Some(!s.default_required),
            _ => return None,
        }
        Some(patch)
    }

    /// 解析输入框文本；像素值只接受非负整数
    pub fn patch_from_input(self, input: &str) -> Option<SettingsPatch> {
        let mut patch = SettingsPatch::default();
        let px = || input.trim().parse::<u32>().ok();
        match self {
            SettingKey::Width => patch.width = Some(px()?),
            SettingKey::Padding => patch.padding = Some(px()?),
            SettingKey::Spacing => patch.spacing = Some(px()?),
            SettingKey::BorderRadius => patch.border_radius = Some(px()?),
            SettingKey::SuccessMessage => patch.success_message = Some(input.to_string()),
            SettingKey::RedirectUrl => patch.redirect_url = Some(input.trim().to_string()),
            _ => return None,
        }
        Some(patch)
    }
}

fn next<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let i = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(i + 1) % all.len()]
}

#[cfg(test)]
#[path = "../../tests/unit/tui/settings_rows.rs"]
mod tests;
