#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod dialogs;
pub mod error;
pub mod input;
pub mod panels;
pub mod preferences;
pub mod raster;
pub mod texture_manager;
pub mod tools;
pub mod workspace;

pub use app::PaintApp;
pub use canvas::{Canvas, CanvasId, SaveOutcome};
pub use error::{CanvasError, PreferencesError};
pub use input::{InputEvent, InputLocation};
pub use preferences::Preferences;
pub use texture_manager::TextureManager;
pub use tools::{Tool, ToolKind, ToolType};
pub use workspace::{CloseChoice, CloseOutcome, Workspace};
