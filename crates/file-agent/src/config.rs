use std::env;

use crate::path::PathPolicy;

const CONFINE_PATHS_VAR: &str = "FILE_AGENT_CONFINE_PATHS";
const AUTO_APPROVE_VAR: &str = "FILE_AGENT_AUTO_APPROVE";

/// Builder for [`ToolsetConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToolsetConfigBuilder {
    path_policy: Option<PathPolicy>,
    auto_approve: Option<bool>,
}

impl ToolsetConfigBuilder {
    /// Creates a builder with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how paths that escape the working directory are handled.
    #[inline]
    pub fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = Some(policy);
        self
    }

    /// Sets whether tool calls run without asking for approval.
    #[inline]
    pub fn with_auto_approve(mut self, auto_approve: bool) -> Self {
        self.auto_approve = Some(auto_approve);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ToolsetConfig {
        ToolsetConfig {
            path_policy: self.path_policy.unwrap_or_default(),
            auto_approve: self.auto_approve.unwrap_or(false),
        }
    }
}

/// Configuration for a [`crate::Toolset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToolsetConfig {
    pub(crate) path_policy: PathPolicy,
    pub(crate) auto_approve: bool,
}

impl ToolsetConfig {
    /// Reads the configuration from the environment.
    ///
    /// - `FILE_AGENT_CONFINE_PATHS`: reject paths that escape the working
    ///   directory.
    /// - `FILE_AGENT_AUTO_APPROVE`: run tool calls without asking.
    ///
    /// Both accept `1`, `true` or `yes`. Unset or any other value means off.
    pub fn from_env() -> Self {
        let mut builder = ToolsetConfigBuilder::new();
        if env_flag(CONFINE_PATHS_VAR) {
            builder = builder.with_path_policy(PathPolicy::Confined);
        }
        builder.with_auto_approve(env_flag(AUTO_APPROVE_VAR)).build()
    }

    /// Returns the path policy.
    #[inline]
    pub fn path_policy(&self) -> PathPolicy {
        self.path_policy
    }

    /// Returns whether tool calls run without asking for approval.
    #[inline]
    pub fn auto_approve(&self) -> bool {
        self.auto_approve
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|value| parse_flag(&value))
}

#[inline]
fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "yes"]
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ToolsetConfigBuilder::new().build();
        assert_eq!(config.path_policy(), PathPolicy::Unrestricted);
        assert!(!config.auto_approve());

        let config = ToolsetConfigBuilder::new()
            .with_path_policy(PathPolicy::Confined)
            .with_auto_approve(true)
            .build();
        assert_eq!(config.path_policy(), PathPolicy::Confined);
        assert!(config.auto_approve());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }
}
