//! 把导出结果写进输出目录

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub fn write_export(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(path)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/export_writer.rs"]
mod tests;
