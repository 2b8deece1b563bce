//! 应用目录
//!
//! 跨平台的数据目录：
//! - macOS: ~/Library/Application Support/zform
//! - Linux: $XDG_DATA_HOME/zform 或 ~/.local/share/zform
//! - Windows: %APPDATA%\zform
//!
//! 设置了 `ZFORM_DATA_DIR` 时直接使用它。

use std::path::PathBuf;

const APP_NAME: &str = "zform";
const LOG_DIR: &str = "logs";
const EXPORT_DIR: &str = "exports";
const DOCUMENT_FILE: &str = "form.json";

pub const DATA_DIR_ENV: &str = "ZFORM_DATA_DIR";

/// 获取应用数据目录
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    #[cfg(target_os = "macos")]
    {
        dirs_path_macos()
    }

    #[cfg(target_os = "linux")]
    {
        dirs_path_linux()
    }

    #[cfg(target_os = "windows")]
    {
        dirs_path_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn dirs_path_macos() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn dirs_path_linux() -> Option<PathBuf> {
    // 优先使用 XDG_DATA_HOME，否则使用 ~/.local/share
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
    }
}

#[cfg(target_os = "windows")]
fn dirs_path_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// 默认导出目录
pub fn get_export_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(EXPORT_DIR))
}

/// 持久化文档的路径
pub fn get_document_path() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(DOCUMENT_FILE))
}

fn ensure_dir(dir: Option<PathBuf>, what: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Cannot determine {what} directory"),
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "log")
}

pub fn ensure_export_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_export_dir(), "export")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
