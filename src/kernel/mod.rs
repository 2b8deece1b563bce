//! Headless builder core (state/action/effect).

pub mod action;
pub mod dnd;
pub mod effect;
pub mod model;
pub mod selection;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, ExportDestination};
pub use dnd::{drop_intent, DragPayload, DragState, DropIntent, DropTarget};
pub use effect::Effect;
pub use model::FormModel;
pub use selection::{properties_for, PropertyEditor, PropertySchema, Selection};
pub use state::{BuilderState, PaletteState, ViewMode};
pub use store::{DispatchResult, Store};
