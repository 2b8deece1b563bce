//! 导出：把当前文档序列化为 HTML / JSON / React / Vue 源码
//!
//! 导出只读文档，不产生历史记录。

pub mod html;
pub mod json;
pub mod markup;
pub mod react;
pub mod vue;

use std::fmt;
use std::str::FromStr;

use crate::error::{FormError, Result};
use crate::models::FormDocument;

pub use html::export_html;
pub use json::{export_json, export_json_at, import_json};
pub use react::export_react;
pub use vue::export_vue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Html,
    Json,
    React,
    Vue,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Html,
        ExportFormat::Json,
        ExportFormat::React,
        ExportFormat::Vue,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::React => "jsx",
            ExportFormat::Vue => "vue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Json => "JSON",
            ExportFormat::React => "React",
            ExportFormat::Vue => "Vue",
        }
    }

    /// 导出文件名：`<标题 slug>.<扩展名>`
    pub fn file_name(self, title: &str) -> String {
        format!("{}.{}", markup::slugify(title), self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = FormError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "react" | "jsx" => Ok(ExportFormat::React),
            "vue" => Ok(ExportFormat::Vue),
            other => Err(FormError::ExportFailure(format!(
                "unsupported format: {other}"
            ))),
        }
    }
}

pub fn export_as(document: &FormDocument, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Html => Ok(export_html(document)),
        ExportFormat::Json => export_json(document),
        ExportFormat::React => Ok(export_react(document)),
        ExportFormat::Vue => Ok(export_vue(document)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/formats.rs"]
mod tests;
