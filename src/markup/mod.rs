/// Markup subsystem - Turns loosely structured tip text into display blocks
///
/// Rendering is a pure function of the input text: one block per input line,
/// each carrying its inline segments (plain text, links, bold labels).

pub mod block;
pub mod inline;

// Re-export public interface
pub use block::{RenderedBlock, collect_links, render};
pub use inline::InlineSegment;
