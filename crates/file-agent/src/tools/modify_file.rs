use file_agent_core::tool::{Approval as ToolApproval, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

use super::{joined_path, run_blocking};
use crate::ops;
use crate::path::PathPolicy;

/// Parameters of [`ModifyFileTool`].
#[derive(Deserialize, JsonSchema)]
pub struct ModifyFileParameters {
    #[schemars(description = "Working directory to resolve the file path.")]
    working_directory: String,
    #[schemars(
        description = "Path of the file to modify, relative to the working directory."
    )]
    file_path: String,
    #[schemars(description = "New content to append.")]
    content: String,
}

/// A tool for appending content to an existing file.
pub struct ModifyFileTool {
    parameter_schema: Value,
    policy: PathPolicy,
}

impl ModifyFileTool {
    /// Creates a new modify file tool.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(PathPolicy::default())
    }

    /// Creates a new modify file tool with the given path policy.
    #[inline]
    pub fn with_policy(policy: PathPolicy) -> Self {
        ModifyFileTool {
            parameter_schema: schema_for!(ModifyFileParameters).to_value(),
            policy,
        }
    }
}

impl Default for ModifyFileTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ModifyFileTool {
    type Input = ModifyFileParameters;

    fn name(&self) -> &str {
        "modify_file"
    }

    fn description(&self) -> &str {
        r#"
Appends content to the end of an existing file (relative to the working directory).
The existing content is kept. The file must exist, use `create_file` to create a new one."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn make_approval(&self, input: &Self::Input) -> ToolApproval {
        ToolApproval::new(
            joined_path(&input.working_directory, &input.file_path),
            "Agent wants to append to a file",
        )
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: ModifyFileParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let policy = self.policy;
        async move {
            policy.check(&input.working_directory, &input.file_path)?;
            run_blocking(move || {
                ops::modify_file(
                    &input.working_directory,
                    &input.file_path,
                    &input.content,
                )
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use file_agent_core::tool::ErrorKind;

    use super::*;

    #[tokio::test]
    async fn test_modify_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log.txt"), "one").unwrap();
        let tool = ModifyFileTool::new();

        let output = tool
            .execute(ModifyFileParameters {
                working_directory: dir.path().to_str().unwrap().to_owned(),
                file_path: "log.txt".to_owned(),
                content: ", two".to_owned(),
            })
            .await;
        assert_eq!(output.unwrap(), "Content appended to log.txt");
        assert_eq!(
            fs::read_to_string(dir.path().join("log.txt")).unwrap(),
            "one, two"
        );

        let err = tool
            .execute(ModifyFileParameters {
                working_directory: dir.path().to_str().unwrap().to_owned(),
                file_path: "missing.txt".to_owned(),
                content: "x".to_owned(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionError);
    }
}
