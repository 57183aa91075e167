//! Tools that let an agent manage files under a working directory.
//!
//! Every tool takes the working directory as a parameter, resolves the
//! target path against it, and runs the matching [`crate::ops`] function on
//! the blocking thread pool.

mod create_directory;
mod create_file;
mod delete_directory;
mod delete_file;
mod modify_file;

use std::io;
use std::path::Path;

use file_agent_core::tool::{Error as ToolError, ToolResult};
use tokio::task::spawn_blocking;

pub use create_directory::CreateDirectoryTool;
pub use create_file::CreateFileTool;
pub use delete_directory::DeleteDirectoryTool;
pub use delete_file::DeleteFileTool;
pub use modify_file::ModifyFileTool;

/// Runs a blocking file operation and turns its I/O error into a tool error.
async fn run_blocking<F>(op: F) -> ToolResult
where
    F: FnOnce() -> io::Result<String> + Send + 'static,
{
    match spawn_blocking(op).await {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(err)) => {
            Err(ToolError::execution_error().with_reason(err.to_string()))
        }
        Err(_) => Err(ToolError::execution_error()
            .with_reason("File operation was aborted")),
    }
}

/// The path shown to the user when asking for approval.
#[inline]
fn joined_path(working_directory: &str, relative_path: &str) -> String {
    Path::new(working_directory)
        .join(relative_path)
        .display()
        .to_string()
}
