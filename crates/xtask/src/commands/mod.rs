//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod los;
mod path;
mod reach;
mod render;

pub use los::Los;
pub use path::Path;
pub use reach::Reach;
pub use render::Render;
