use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Describes a tool so that a planner can discover and call it.
///
/// A definition is pure data and can be serialized independently of the
/// tool that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool, as a
    /// [JSON schema](https://json-schema.org/).
    pub parameters: Value,
}

/// A request to call a tool.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCall {
    /// The identifier of this call, echoed back with the result.
    #[serde(default)]
    pub id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: Value,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_call_without_id() {
        let call: ToolCall = serde_json::from_value(json!({
            "name": "create_directory",
            "arguments": {
                "working_directory": "/tmp/sandbox",
                "directory_path": "x/y/z"
            }
        }))
        .unwrap();

        assert_eq!(call.id, "");
        assert_eq!(call.name, "create_directory");
        assert_eq!(call.arguments["directory_path"], "x/y/z");
    }
}
