//! Detection of relative paths that escape their working directory.

use std::path::{Component, Path};

use file_agent_core::tool::Error as ToolError;

/// What to do with a relative path that points outside the working
/// directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathPolicy {
    /// Allow the path, but log a warning for it.
    #[default]
    Unrestricted,
    /// Refuse the call before touching the filesystem.
    Confined,
}

impl PathPolicy {
    /// Checks `relative_path` against this policy.
    pub fn check(
        self,
        working_directory: &str,
        relative_path: &str,
    ) -> Result<(), ToolError> {
        if !escapes_working_directory(relative_path) {
            return Ok(());
        }
        match self {
            PathPolicy::Unrestricted => {
                warn!(
                    "path `{relative_path}` escapes working directory \
                     `{working_directory}`"
                );
                Ok(())
            }
            PathPolicy::Confined => Err(ToolError::permission_denied()
                .with_reason(format!(
                    "`{relative_path}` is outside of `{working_directory}`"
                ))),
        }
    }
}

/// Returns `true` if joining `relative_path` onto a working directory may
/// produce a path outside of it.
///
/// The check is lexical. Symlinks are not resolved.
pub fn escapes_working_directory<P: AsRef<Path>>(relative_path: P) -> bool {
    let mut depth = 0usize;
    for component in relative_path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return true,
            Component::CurDir => {}
            Component::ParentDir => {
                let Some(parent) = depth.checked_sub(1) else {
                    return true;
                };
                depth = parent;
            }
            Component::Normal(_) => depth += 1,
        }
    }
    false
}
