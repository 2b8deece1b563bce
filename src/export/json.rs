//! JSON 导出与导入

use chrono::{DateTime, SecondsFormat, Utc};
use rustc_hash::FxHashSet;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::models::{Field, FormDocument};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedDocument<'a> {
    #[serde(flatten)]
    document: &'a FormDocument,
    exported_at: String,
}

pub fn export_json(document: &FormDocument) -> Result<String> {
    export_json_at(document, Utc::now())
}

/// 时间戳由调用方给出，便于测试
pub fn export_json_at(document: &FormDocument, at: DateTime<Utc>) -> Result<String> {
    let exported = ExportedDocument {
        document,
        exported_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    serde_json::to_string_pretty(&exported).map_err(|e| FormError::ExportFailure(e.to_string()))
}

/// 导入 JSON：完整的导出对象，或者只有字段数组
///
/// 缺失的设置项取默认值，`exportedAt` 被忽略。
pub fn import_json(input: &str) -> Result<FormDocument> {
    let value: Value = serde_json::from_str(input)?;
    let document = match value {
        Value::Object(_) => serde_json::from_value::<FormDocument>(value)?,
        Value::Array(_) => FormDocument {
            fields: serde_json::from_value::<Vec<Field>>(value)?,
            ..FormDocument::default()
        },
        _ => {
            return Err(FormError::InvalidImport(
                "expected a form object or a field array".to_string(),
            ))
        }
    };
    validate_document(&document)?;
    Ok(document)
}

/// 导入和加载共用的检查：ID 唯一、ID 之后还能继续分配、choice 字段至少一个选项
pub(crate) fn validate_document(document: &FormDocument) -> Result<()> {
    let mut seen = FxHashSet::default();
    for field in &document.fields {
        if field.id.0 == u64::MAX {
            return Err(FormError::InvalidImport(format!("id {} is out of range", field.id.0)));
        }
        if !seen.insert(field.id) {
            return Err(FormError::InvalidImport(format!("duplicate id {}", field.id)));
        }
        if field.is_choice() && field.options.is_empty() {
            return Err(FormError::InvalidImport(format!(
                "{} ({}) has no options",
                field.id, field.field_type
            )));
        }
    }
    Ok(())
}
