use std::collections::BTreeMap;
use std::future::ready;
use std::sync::Arc;

use super::object::{OnRequest, ToolObject, ToolObjectImpl};
use super::{Approval, Error, Tool, ToolCall, ToolDefinition, ToolFuture};

/// An object that manages a toolset and dispatches calls to it by name.
///
/// Tools are kept ordered by name, so [`Toolbox::definitions`] is stable
/// across runs.
#[derive(Default)]
pub struct Toolbox {
    tools: BTreeMap<String, Arc<dyn ToolObject>>,
    on_request: OnRequest,
}

impl Toolbox {
    /// Registers a tool, replacing any tool with the same name.
    pub fn add_tool<T: Tool>(&mut self, tool: T) {
        let name = tool.name().to_owned();
        if self
            .tools
            .insert(name.clone(), Arc::new(ToolObjectImpl(tool)))
            .is_some()
        {
            debug!("replaced tool: {name}");
        }
    }

    /// Sets the callback that decides whether a tool call may run.
    ///
    /// Without a callback, every call is approved.
    #[inline]
    pub fn on_request<F: Fn(Approval) + Send + Sync + 'static>(
        &mut self,
        on_request: F,
    ) {
        self.on_request = Some(Box::new(on_request));
    }

    /// Returns the names of all registered tools.
    #[inline]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Returns the definitions of all registered tools.
    #[inline]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Calls a tool.
    ///
    /// The approval callback (if any) is invoked before this method
    /// returns, and the returned future resolves once the decision is
    /// made and the tool has run.
    pub fn call(&self, call: ToolCall) -> ToolFuture {
        let Some(tool) = self.tools.get(&call.name) else {
            warn!("tool not found: {}", call.name);
            let err = Error::unknown_tool()
                .with_reason(format!("no tool named `{}`", call.name));
            return Box::pin(ready(Err(err)));
        };
        trace!("calling a tool ({}) with args: {:?}", call.id, call.arguments);
        Arc::clone(tool).execute(call.arguments, &self.on_request)
    }

    /// Hands the future of every known call to `spawner`, keyed by the
    /// call id. Calls to unknown tools are skipped.
    pub fn handle_requests<S>(&self, requests: Vec<ToolCall>, spawner: S)
    where
        S: FnMut(String, ToolFuture),
    {
        let mut spawner = spawner;

        let span = debug_span!("toolbox");
        let _enter = span.enter();

        for req in requests {
            let Some(tool) = self.tools.get(&req.name) else {
                warn!("tool not found: {}", req.name);
                continue;
            };

            let id = req.id;
            let arguments = req.arguments;
            trace!("spawning a tool ({id}) with args: {arguments:?}");
            spawner(id, Arc::clone(tool).execute(arguments, &self.on_request));
        }
    }
}
