//! 数据模型层

pub mod document;
pub mod field;
pub mod field_type;
pub mod history;
pub mod settings;

pub use document::{FormDocument, MoveDirection, DEFAULT_TITLE};
pub use field::{Field, FieldId, FieldIdGen, FieldOption, FieldProps, OptionPatch};
pub use field_type::{Category, FieldType};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
pub use settings::{FormSettings, SettingsPatch, SubmitAction, Theme, ThemePalette};
