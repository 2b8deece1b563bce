//! 表单构建器的错误类型
//!
//! 所有错误都在 Store 的操作边界被转换为通知，文档模型不会停留在部分修改的状态。

use crate::kernel::services::ports::Severity;
use crate::models::FieldId;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),
    #[error("option {index} not found on {field}")]
    OptionNotFound { field: FieldId, index: usize },
    #[error("{0} has no options")]
    NotAChoiceField(FieldId),
    #[error("invalid import: {0}")]
    InvalidImport(String),
    #[error("export failed: {0}")]
    ExportFailure(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl FormError {
    /// 找不到引用对象只是警告；导入/导出/存储失败才算错误
    pub fn severity(&self) -> Severity {
        match self {
            FormError::FieldNotFound(_)
            | FormError::OptionNotFound { .. }
            | FormError::NotAChoiceField(_) => Severity::Warning,
            FormError::UnknownFieldType(_)
            | FormError::InvalidImport(_)
            | FormError::ExportFailure(_)
            | FormError::Storage(_) => Severity::Error,
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::InvalidImport(err.to_string())
    }
}
