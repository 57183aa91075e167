//! Tool call supports.

mod approval;
mod definition;
mod error;
mod object;
mod toolbox;

use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use approval::Approval;
pub use definition::{ToolCall, ToolDefinition};
pub use error::{Error, ErrorKind};
pub use toolbox::Toolbox;

/// The result of a tool call.
pub type ToolResult = Result<String, Error>;

/// A type-erased, pending tool call.
pub type ToolFuture = Pin<Box<dyn Future<Output = ToolResult> + Send>>;

/// A tool that can be called by an agent.
///
/// Implementations of this trait should be stateless, and may not maintain any
/// internal state.
///
/// The tool can be context-aware, meaning it can access additional information
/// about the current execution context, such as a path policy. To do this,
/// make the context an immutable state of the tool, which can be set during
/// initialization, and copy it when executing.
pub trait Tool: Send + Sync + 'static {
    /// The type of input that the tool accepts.
    type Input: DeserializeOwned + Send + 'static;

    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Returns the parameter schema of the tool.
    fn parameter_schema(&self) -> &Value;

    /// Makes an approval request describing what this call is about to do.
    fn make_approval(&self, input: &Self::Input) -> Approval;

    /// Executes the tool with the given input.
    ///
    /// This method must return a future that is fully independent of `self`.
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = ToolResult> + Send + 'static;

    /// Returns the declarative definition of this tool.
    #[inline]
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_owned(),
            description: self.description().trim().to_owned(),
            parameters: self.parameter_schema().clone(),
        }
    }
}
