use file_agent_core::tool::{Approval as ToolApproval, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

use super::{joined_path, run_blocking};
use crate::ops;
use crate::path::PathPolicy;

/// Parameters of [`CreateDirectoryTool`].
#[derive(Deserialize, JsonSchema)]
pub struct CreateDirectoryParameters {
    #[schemars(
        description = "Working directory to resolve the directory path."
    )]
    working_directory: String,
    #[schemars(
        description = "Path of the directory to create, relative to the working directory."
    )]
    directory_path: String,
}

/// A tool for creating a directory and its missing parents.
pub struct CreateDirectoryTool {
    parameter_schema: Value,
    policy: PathPolicy,
}

impl CreateDirectoryTool {
    /// Creates a new create directory tool.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(PathPolicy::default())
    }

    /// Creates a new create directory tool with the given path policy.
    #[inline]
    pub fn with_policy(policy: PathPolicy) -> Self {
        CreateDirectoryTool {
            parameter_schema: schema_for!(CreateDirectoryParameters)
                .to_value(),
            policy,
        }
    }
}

impl Default for CreateDirectoryTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CreateDirectoryTool {
    type Input = CreateDirectoryParameters;

    fn name(&self) -> &str {
        "create_directory"
    }

    fn description(&self) -> &str {
        r#"
Creates a directory at the given path (relative to the working directory).
Missing intermediate directories are created as well. Succeeds if the directory already exists."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn make_approval(&self, input: &Self::Input) -> ToolApproval {
        ToolApproval::new(
            joined_path(&input.working_directory, &input.directory_path),
            "Agent wants to create a directory",
        )
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: CreateDirectoryParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let policy = self.policy;
        async move {
            policy.check(&input.working_directory, &input.directory_path)?;
            run_blocking(move || {
                ops::create_directory(
                    &input.working_directory,
                    &input.directory_path,
                )
            })
            .await
        }
    }
}
