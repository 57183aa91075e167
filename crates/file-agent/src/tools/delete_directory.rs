use file_agent_core::tool::{Approval as ToolApproval, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

use super::{joined_path, run_blocking};
use crate::ops;
use crate::path::PathPolicy;

/// Parameters of [`DeleteDirectoryTool`].
#[derive(Deserialize, JsonSchema)]
pub struct DeleteDirectoryParameters {
    #[schemars(
        description = "Working directory to resolve the directory path."
    )]
    working_directory: String,
    #[schemars(
        description = "Path of the directory to delete, relative to the working directory."
    )]
    directory_path: String,
}

/// A tool for deleting a directory with everything in it.
pub struct DeleteDirectoryTool {
    parameter_schema: Value,
    policy: PathPolicy,
}

impl DeleteDirectoryTool {
    /// Creates a new delete directory tool.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(PathPolicy::default())
    }

    /// Creates a new delete directory tool with the given path policy.
    #[inline]
    pub fn with_policy(policy: PathPolicy) -> Self {
        DeleteDirectoryTool {
            parameter_schema: schema_for!(DeleteDirectoryParameters)
                .to_value(),
            policy,
        }
    }
}

impl Default for DeleteDirectoryTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for DeleteDirectoryTool {
    type Input = DeleteDirectoryParameters;

    fn name(&self) -> &str {
        "delete_directory"
    }

    fn description(&self) -> &str {
        r#"
Deletes the directory at the given path (relative to the working directory), including all of its files and subdirectories.
If the directory does not exist, nothing happens and the result says so."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn make_approval(&self, input: &Self::Input) -> ToolApproval {
        ToolApproval::new(
            joined_path(&input.working_directory, &input.directory_path),
            "Agent wants to delete a directory and everything in it",
        )
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: DeleteDirectoryParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let policy = self.policy;
        async move {
            policy.check(&input.working_directory, &input.directory_path)?;
            run_blocking(move || {
                ops::delete_directory(
                    &input.working_directory,
                    &input.directory_path,
                )
            })
            .await
        }
    }
}
