//! 单行输入框

use unicode_width::UnicodeWidthStr;

use crate::export::ExportFormat;
use crate::kernel::ExportDestination;
use crate::models::FieldId;
use crate::schema::PropertyKey;

use super::settings_rows::SettingKey;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptKind {
    Property { id: FieldId, key: PropertyKey },
    OptionLabel { id: FieldId, index: usize },
    Setting(SettingKey),
    Title,
    Description,
    PaletteSearch,
    Export(ExportTarget),
    ImportPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    File,
    Clipboard,
}

impl ExportTarget {
    pub fn destination(self, dir: &std::path::Path) -> ExportDestination {
        match self {
            ExportTarget::File => ExportDestination::Directory(dir.to_path_buf()),
            ExportTarget::Clipboard => ExportDestination::Clipboard,
        }
    }
}

impl PromptKind {
    pub fn title(&self) -> String {
        match self {
            PromptKind::Property { key, .. } => key.label().to_string(),
            PromptKind::OptionLabel { index, .. } => format!("Option {}", index + 1),
            PromptKind::Setting(key) => key.label().to_string(),
            PromptKind::Title => "Form Title".to_string(),
            PromptKind::Description => "Form Description".to_string(),
            PromptKind::PaletteSearch => "Search Elements".to_string(),
            PromptKind::Export(_) => {
                let formats: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
                format!("Export as ({})", formats.join("/"))
            }
            PromptKind::ImportPath => "Import JSON file".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    buffer: String,
    /// 光标所在的字节偏移
    cursor: usize,
}

impl Prompt {
    pub fn new(kind: PromptKind, initial: impl Into<String>) -> Self {
        let buffer = initial.into();
        let cursor = buffer.len();
        Self {
            kind,
            buffer,
            cursor,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn into_text(self) -> String {
        self.buffer
    }

    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        // 粘贴内容只取第一行
        let line = s.lines().next().unwrap_or_default();
        self.buffer.insert_str(self.cursor, line);
        self.cursor += line.len();
    }

    pub fn backspace(&mut self) {
        if let Some(ch) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if let Some(ch) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    pub fn right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// 光标的显示列（宽字符占两列）
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/prompt.rs"]
mod tests;
