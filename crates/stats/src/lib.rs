pub mod analysis;
pub mod error;
pub mod input;

// Pure input handling and statistics; no I/O lives in this crate.
pub use analysis::*;
pub use error::*;
pub use input::*;
