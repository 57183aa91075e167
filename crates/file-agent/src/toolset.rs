use file_agent_core::tool::Approval as ToolApproval;
use file_agent_core::{ToolCall, ToolDefinition, ToolFuture, Toolbox};

use crate::config::ToolsetConfig;
use crate::tools::*;

/// A toolset builder.
///
/// See [`Toolset`].
#[derive(Default)]
pub struct ToolsetBuilder {
    config: ToolsetConfig,
    on_tool_call_request: Option<Box<dyn Fn(ToolApproval) + Send + Sync>>,
}

impl ToolsetBuilder {
    /// Creates a toolset builder with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toolset builder with the specified configuration.
    #[inline]
    pub fn with_config(config: ToolsetConfig) -> Self {
        Self {
            config,
            on_tool_call_request: None,
        }
    }

    /// Attaches a callback to be invoked when a tool call request is
    /// received.
    ///
    /// The callback is ignored when the configuration enables auto
    /// approval.
    #[inline]
    pub fn on_tool_call_request(
        mut self,
        on_tool_call_request: impl Fn(ToolApproval) + Send + Sync + 'static,
    ) -> Self {
        self.on_tool_call_request = Some(Box::new(on_tool_call_request));
        self
    }

    /// Builds a new toolset.
    pub fn build(self) -> Toolset {
        let policy = self.config.path_policy;

        let mut toolbox = Toolbox::default();
        toolbox.add_tool(CreateFileTool::with_policy(policy));
        toolbox.add_tool(ModifyFileTool::with_policy(policy));
        toolbox.add_tool(DeleteFileTool::with_policy(policy));
        toolbox.add_tool(CreateDirectoryTool::with_policy(policy));
        toolbox.add_tool(DeleteDirectoryTool::with_policy(policy));

        match self.on_tool_call_request {
            Some(_) if self.config.auto_approve => {
                debug!("auto approval enabled, ignoring the request callback");
            }
            Some(on_request) => toolbox.on_request(on_request),
            None => {}
        }

        Toolset { toolbox }
    }
}

/// The file management tools, registered and ready to be called by name.
///
/// This is what an agent host hands to its planner: the definitions go into
/// the model request, and the tool calls the model makes come back through
/// [`Toolset::call`] or [`Toolset::handle_requests`].
pub struct Toolset {
    toolbox: Toolbox,
}

impl Toolset {
    /// Returns the names of all tools, ordered by name.
    #[inline]
    pub fn tool_names(&self) -> Vec<&str> {
        self.toolbox.tool_names()
    }

    /// Returns the definitions of all tools, ordered by name.
    #[inline]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.toolbox.definitions()
    }

    /// Calls a tool.
    #[inline]
    pub fn call(&self, call: ToolCall) -> ToolFuture {
        self.toolbox.call(call)
    }

    /// Hands every known call to `spawner`, keyed by the call id.
    #[inline]
    pub fn handle_requests<S>(&self, requests: Vec<ToolCall>, spawner: S)
    where
        S: FnMut(String, ToolFuture),
    {
        self.toolbox.handle_requests(requests, spawner);
    }
}
