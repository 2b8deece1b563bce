//! 文档存储：JSON 文件 / 内存

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FormError, Result};
use crate::export::json::validate_document;
use crate::kernel::services::ports::DocumentStorage;
use crate::models::FormDocument;

use super::paths;

/// 以格式化 JSON 保存在单个文件里
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<数据目录>/form.json`
    pub fn default_location() -> Result<Self> {
        paths::get_document_path().map(Self::new).ok_or_else(|| {
            FormError::Storage(std::io::Error::new(
                ErrorKind::NotFound,
                "Cannot determine data directory",
            ))
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<FormDocument>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let document: FormDocument = serde_json::from_str(&text).map_err(invalid_data)?;
        validate_document(&document).map_err(invalid_data)?;
        Ok(Some(document))
    }

    fn save(&self, document: &FormDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(document).map_err(invalid_data)?;
        // 写临时文件后 rename
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}

/// 存储文件内容有问题属于存储错误，不是导入错误
fn invalid_data(err: impl std::fmt::Display) -> FormError {
    FormError::Storage(std::io::Error::new(ErrorKind::InvalidData, err.to_string()))
}

/// 内存存储（测试、无持久化运行）
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: RefCell<Option<FormDocument>>,
    saves: RefCell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: FormDocument) -> Self {
        Self {
            document: RefCell::new(Some(document)),
            saves: RefCell::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    pub fn snapshot(&self) -> Option<FormDocument> {
        self.document.borrow().clone()
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self) -> Result<Option<FormDocument>> {
        Ok(self.document.borrow().clone())
    }

    fn save(&self, document: &FormDocument) -> Result<()> {
        *self.document.borrow_mut() = Some(document.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
