/// View subsystem - Terminal presentation of the three screens
///
/// Screens are composed into a `Frame` of styled lines (with clickable
/// regions), then the renderer writes only what changed since the last frame.

pub mod layout;
pub mod plain;
pub mod pointer;
pub mod renderer;
pub mod screens;
pub mod view_model;

// Re-export public interface
pub use layout::{Frame, HitTarget};
pub use pointer::{MouseCapture, PointerAction, PointerState};
pub use renderer::View;
pub use screens::{ScreenOptions, compose, grid_columns};
pub use view_model::AppViewModel;
