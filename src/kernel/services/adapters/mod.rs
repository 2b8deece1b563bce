//! Service adapters: OS specific implementations (filesystem, paths).

pub mod export_writer;
pub mod paths;
pub mod storage;

pub use export_writer::write_export;
pub use paths::{
    ensure_export_dir, ensure_log_dir, get_app_data_dir, get_document_path, get_export_dir,
    get_log_dir, DATA_DIR_ENV,
};
pub use storage::{JsonFileStorage, MemoryStorage};
