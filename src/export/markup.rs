//! 导出器共用的转义、样式表和提交处理片段

use std::fmt::Write;

use crate::models::{FormSettings, SubmitAction};
use crate::render::BindingValue;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 双引号 JS 字符串字面量
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // 避免在 <script> 中提前闭合标签
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// 数字字面量：整数不带小数点
pub fn number(v: f64) -> String {
    if v.is_finite() {
        format!("{v}")
    } else {
        "0".to_string()
    }
}

/// 绑定初始值的 JS 字面量
pub fn binding_literal(value: &BindingValue) -> String {
    match value {
        BindingValue::Text(s) => js_string(s),
        BindingValue::Number(n) => number(*n),
        BindingValue::List(items) => {
            let items: Vec<String> = items.iter().map(|s| js_string(s)).collect();
            format!("[{}]", items.join(", "))
        }
        BindingValue::File => "null".to_string(),
    }
}

/// 文件名：标题转成小写连字符
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "form".to_string()
    } else {
        slug
    }
}

/// html 与 vue 导出共用的样式表，数值全部来自表单设置
pub fn stylesheet(settings: &FormSettings) -> String {
    let palette = settings.theme.palette();
    let radius = settings.border_radius;
    let mut css = String::new();
    let _ = writeln!(css, "* {{ box-sizing: border-box; }}");
    let _ = writeln!(
        css,
        ".form-container {{ max-width: {}px; margin: 40px auto; padding: {}px; background: {}; color: {}; border-radius: {}px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.08); }}",
        settings.width, settings.padding, palette.background, palette.foreground, radius
    );
    let _ = writeln!(css, ".form-container h1 {{ margin: 0 0 8px; }}");
    let _ = writeln!(
        css,
        ".form-description {{ margin: 0 0 {}px; opacity: 0.75; }}",
        settings.spacing
    );
    let _ = writeln!(
        css,
        ".form-group {{ margin-bottom: {}px; }}",
        settings.spacing
    );
    let _ = writeln!(
        css,
        ".form-group > label {{ display: block; font-weight: 600; margin-bottom: 6px; }}"
    );
    let _ = writeln!(
        css,
        ".form-control {{ width: 100%; padding: 10px 12px; border: 1px solid {}; border-radius: {}px; font: inherit; background: transparent; color: inherit; }}",
        palette.border, radius
    );
    let _ = writeln!(
        css,
        ".choice {{ display: flex; align-items: center; gap: 8px; margin-bottom: 4px; }}"
    );
    let _ = writeln!(css, ".required {{ color: #ef4444; margin-left: 2px; }}");
    let _ = writeln!(css, ".help {{ display: block; font-size: 0.85em; opacity: 0.7; margin-top: 4px; }}");
    let _ = writeln!(
        css,
        ".form-section {{ margin: {}px 0; padding-bottom: 8px; border-bottom: 1px solid {}; }}",
        settings.spacing, palette.border
    );
    let _ = writeln!(
        css,
        ".form-columns {{ display: grid; gap: {}px; margin-bottom: {}px; }}",
        settings.spacing, settings.spacing
    );
    let _ = writeln!(
        css,
        ".form-submit {{ background: {}; color: #ffffff; border: none; padding: 12px 24px; border-radius: {}px; font: inherit; font-weight: 600; cursor: pointer; }}",
        palette.accent, radius
    );
    let _ = writeln!(
        css,
        ".success-message {{ padding: 16px; border-radius: {}px; background: #ecfdf5; color: #065f46; }}",
        radius
    );
    css
}

/// 提交后的动作，`data` 是收集到的键值对象的表达式
pub fn submit_action_js(settings: &FormSettings, title: &str, data: &str, indent: &str) -> String {
    match settings.submit_action {
        SubmitAction::Message => String::new(),
        SubmitAction::Redirect => format!(
            "{indent}window.location.href = {};\n",
            js_string(&settings.redirect_url)
        ),
        SubmitAction::Email => format!(
            "{indent}window.location.href = 'mailto:?subject=' + encodeURIComponent({}) + '&body=' + encodeURIComponent(JSON.stringify({data}, null, 2));\n",
            js_string(title)
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/markup.rs"]
mod tests;
