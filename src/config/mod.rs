/// Configuration subsystem - Display settings and preferences
///
/// Settings come from a .studybuddyrc file; command line flags override them.

pub mod rc;

// Re-export public interface
pub use rc::{RcConfig, RcLoader};
