//! Core plumbing for tools that an agent can discover and call: the tool
//! trait, tool errors, approvals, declarative definitions, and a registry
//! that dispatches tool calls by name.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod tool;

pub use tool::{
    Tool, ToolCall, ToolDefinition, ToolFuture, ToolResult, Toolbox,
};
