use crate::error::Result;
use crate::models::FormDocument;

/// 文档持久化
///
/// `load` 在还没有保存过任何文档时返回 `Ok(None)`。
pub trait DocumentStorage {
    fn load(&self) -> Result<Option<FormDocument>>;
    fn save(&self, document: &FormDocument) -> Result<()>;
}
