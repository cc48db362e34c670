mod canvas_panel;
mod color_panel;
mod tools_panel;

pub use canvas_panel::canvas_windows;
pub use color_panel::color_panel;
pub use tools_panel::tools_panel;
