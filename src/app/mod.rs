//! Application-Layer: Controller, State, Sitzung und Events.

pub mod command_log;
pub mod controller;
pub mod events;
mod intent_mapping;
pub mod render_scene;
pub mod session;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use session::{Session, SessionMode};
pub use state::AppState;
