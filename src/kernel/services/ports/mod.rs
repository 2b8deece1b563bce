//! Service ports: traits + data contracts.

pub mod notice;
pub mod storage;

pub use notice::{Notice, Severity};
pub use storage::DocumentStorage;
