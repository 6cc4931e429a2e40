//! External tool discovery and invocation.
//!
//! - **Probe**: find a tool on PATH and confirm it answers `--version`
//! - **Runner**: run a tool with captured output, mapping non-zero exits
//!   to `ToolError::CommandFailed`

mod errors;
mod probe;
mod runner;

pub use errors::{ToolError, ToolResult};
pub use probe::{check_command, locate, Tool, ToolSet};
pub use runner::ToolCommand;
