use file_agent_core::tool::{Approval as ToolApproval, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

use super::{joined_path, run_blocking};
use crate::ops;
use crate::path::PathPolicy;

/// Parameters of [`DeleteFileTool`].
#[derive(Deserialize, JsonSchema)]
pub struct DeleteFileParameters {
    #[schemars(description = "Working directory to resolve the file path.")]
    working_directory: String,
    #[schemars(
        description = "Path of the file to delete, relative to the working directory."
    )]
    file_path: String,
}

/// A tool for deleting a file.
pub struct DeleteFileTool {
    parameter_schema: Value,
    policy: PathPolicy,
}

impl DeleteFileTool {
    /// Creates a new delete file tool.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(PathPolicy::default())
    }

    /// Creates a new delete file tool with the given path policy.
    #[inline]
    pub fn with_policy(policy: PathPolicy) -> Self {
        DeleteFileTool {
            parameter_schema: schema_for!(DeleteFileParameters).to_value(),
            policy,
        }
    }
}

impl Default for DeleteFileTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for DeleteFileTool {
    type Input = DeleteFileParameters;

    fn name(&self) -> &str {
        "delete_file"
    }

    fn description(&self) -> &str {
        r#"
Deletes the file at the given path (relative to the working directory).
If the file does not exist, nothing happens and the result says so."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn make_approval(&self, input: &Self::Input) -> ToolApproval {
        ToolApproval::new(
            joined_path(&input.working_directory, &input.file_path),
            "Agent wants to delete a file",
        )
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: DeleteFileParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let policy = self.policy;
        async move {
            policy.check(&input.working_directory, &input.file_path)?;
            run_blocking(move || {
                ops::delete_file(&input.working_directory, &input.file_path)
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[tokio::test]
    async fn test_delete_file_twice() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        let tool = DeleteFileTool::new();

        let params = || DeleteFileParameters {
            working_directory: dir.path().to_str().unwrap().to_owned(),
            file_path: "a.txt".to_owned(),
        };

        let output = tool.execute(params()).await.unwrap();
        assert_eq!(output, "File a.txt deleted.");
        assert!(!dir.path().join("a.txt").exists());

        let output = tool.execute(params()).await.unwrap();
        assert_eq!(output, "File a.txt does not exist.");
    }
}
