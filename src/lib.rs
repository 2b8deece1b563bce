//! zform - 动态表单构建器
//!
//! 模块结构：
//! - models: 数据模型（FormDocument, Field, FormSettings, History）
//! - schema: 字段类型注册表（模板、属性面板、控件映射）
//! - render: 画布树和预览树
//! - export: HTML / JSON / React / Vue 导出，JSON 导入
//! - kernel: 文档模型、选中状态、拖放、Store（action/effect）和服务层
//! - tui: 终端前端（feature `tui`）

pub mod error;
pub mod export;
pub mod kernel;
pub mod models;
pub mod render;
pub mod schema;
#[cfg(feature = "tui")]
pub mod tui;

pub use error::{FormError, Result};
