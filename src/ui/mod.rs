//! UI-Layer mit egui: Zeichenfläche, Input-Handling und Status-Bar.

pub mod canvas;
pub mod input;
mod keyboard;
pub mod painter;
pub mod status;

pub use canvas::{Canvas, EguiCanvas};
pub use input::InputState;
pub use painter::paint_scene;
pub use status::render_status_bar;
