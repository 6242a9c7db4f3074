/// Content subsystem - Static tips and websites loaded once at startup
///
/// The library is either the built-in table or an external TOML content
/// file. After construction it is read-only.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod model;

// Re-export public interface
pub use error::ContentError;
pub use loader::load_content;
pub use model::{ContentLibrary, Tip, Website};
