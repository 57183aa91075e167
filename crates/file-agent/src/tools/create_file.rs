use file_agent_core::tool::{Approval as ToolApproval, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

use super::{joined_path, run_blocking};
use crate::ops;
use crate::path::PathPolicy;

/// Parameters of [`CreateFileTool`].
#[derive(Deserialize, JsonSchema)]
pub struct CreateFileParameters {
    #[schemars(description = "Working directory to resolve the file path.")]
    working_directory: String,
    #[schemars(
        description = "Path of the file to create, relative to the working directory."
    )]
    file_path: String,
    #[schemars(description = "Content of the file.")]
    content: String,
}

/// A tool for creating (or overwriting) a file.
pub struct CreateFileTool {
    parameter_schema: Value,
    policy: PathPolicy,
}

impl CreateFileTool {
    /// Creates a new create file tool.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(PathPolicy::default())
    }

    /// Creates a new create file tool with the given path policy.
    #[inline]
    pub fn with_policy(policy: PathPolicy) -> Self {
        CreateFileTool {
            parameter_schema: schema_for!(CreateFileParameters).to_value(),
            policy,
        }
    }
}

impl Default for CreateFileTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CreateFileTool {
    type Input = CreateFileParameters;

    fn name(&self) -> &str {
        "create_file"
    }

    fn description(&self) -> &str {
        r#"
Creates a file at the given path (relative to the working directory) and writes the content into it.
If the file already exists, it is overwritten. Parent directories must already exist, use `create_directory` first if needed."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn make_approval(&self, input: &Self::Input) -> ToolApproval {
        ToolApproval::new(
            joined_path(&input.working_directory, &input.file_path),
            "Agent wants to create or overwrite a file",
        )
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: CreateFileParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let policy = self.policy;
        async move {
            policy.check(&input.working_directory, &input.file_path)?;
            run_blocking(move || {
                ops::create_file(
                    &input.working_directory,
                    &input.file_path,
                    &input.content,
                )
            })
            .await
        }
    }
}
