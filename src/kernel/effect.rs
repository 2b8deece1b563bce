use std::path::PathBuf;

use super::services::ports::Notice;

/// 交给宿主执行的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// 把当前文档写进存储
    PersistDocument,
    Notify(Notice),
    WriteExport {
        dir: PathBuf,
        file_name: String,
        contents: String,
    },
    SetClipboardText(String),
}
