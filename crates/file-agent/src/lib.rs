//! File management tools for agents.
//!
//! The crate provides five tools that create, append to, and delete files
//! and directories under a caller-supplied working directory, plus a
//! [`Toolset`] that registers them for an agent host. The underlying
//! filesystem operations are available directly in [`ops`].

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod config;
pub mod ops;
pub mod path;
pub mod tools;
mod toolset;

pub use config::{ToolsetConfig, ToolsetConfigBuilder};
pub use path::PathPolicy;
pub use toolset::{Toolset, ToolsetBuilder};

/// Re-exports of [`file_agent_core`] crate.
pub mod core {
    pub use file_agent_core::*;
}
