//! GUI module - egui-based editing interface

mod app;
pub mod components;
pub mod utils;

pub use app::{EditorOptions, run_gui};
