/// Controller subsystem - Navigation state, input handling and the event loop
///
/// `ViewState` is a pure state machine over the three screens. Key and mouse
/// input is translated into `Command`s, which `AppController` executes
/// against the state and the outside world (browser, clipboard).

pub mod app;
pub mod browser;
pub mod help;
pub mod key_handler;
pub mod view_state;

// Re-export public interface
pub use app::AppController;
pub use view_state::{HomeButton, Screen, ViewState};
