//! Build identity read from the CodeBuild environment
//!
//! CodeBuild exposes the build session as `CODEBUILD_BUILD_ID`
//! (format `"<project>:<build-id>"`) and `CODEBUILD_BUILD_NUMBER`.
//! Both are read once at startup; the resulting context is immutable and
//! stamped onto every published metric.

use crate::error::{BuildwatchError, Result};
use std::env;

/// Environment variable holding `"<project>:<build-id>"`.
pub const BUILD_ID_VAR: &str = "CODEBUILD_BUILD_ID";

/// Environment variable holding the build number.
pub const BUILD_NUMBER_VAR: &str = "CODEBUILD_BUILD_NUMBER";

/// Immutable identifiers for the current build session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub project_name: String,
    pub build_id: String,
    pub build_number: String,
}

impl BuildContext {
    /// Read the build context from the process environment.
    ///
    /// Fails if either variable is absent or empty, or if the build-id
    /// variable has no `:` separator. These are misconfigurations the
    /// process cannot recover from.
    pub fn from_env() -> Result<Self> {
        let composite = read_var(BUILD_ID_VAR)?;
        let (project_name, build_id) = split_build_id(&composite)?;
        let build_number = read_var(BUILD_NUMBER_VAR)?;

        Ok(Self {
            project_name,
            build_id,
            build_number,
        })
    }
}

fn read_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim_end().to_string()),
        _ => Err(BuildwatchError::MissingEnvVar {
            name: name.to_string(),
        }),
    }
}

/// Split `"<project>:<build-id>"` on the first `:`.
///
/// Build ids are UUIDs in practice but the split is on the first separator
/// so a build id containing `:` survives intact.
fn split_build_id(composite: &str) -> Result<(String, String)> {
    let trimmed = composite.trim_end();
    match trimmed.split_once(':') {
        Some((project, build_id)) if !project.is_empty() && !build_id.is_empty() => {
            Ok((project.to_string(), build_id.to_string()))
        }
        _ => Err(BuildwatchError::Config(format!(
            "{} must have the form <project>:<build-id>, got {:?}",
            BUILD_ID_VAR, trimmed
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_well_formed() {
        let (project, build_id) = split_build_id("myproj:abc123\n").unwrap();
        assert_eq!(project, "myproj");
        assert_eq!(build_id, "abc123");
    }

    #[test]
    fn test_split_keeps_extra_separators_in_build_id() {
        let (project, build_id) = split_build_id("demo:arn:like:id").unwrap();
        assert_eq!(project, "demo");
        assert_eq!(build_id, "arn:like:id");
    }

    #[test]
    fn test_split_no_separator() {
        let err = split_build_id("no-separator-here").unwrap_err();
        assert!(err.to_string().contains("CODEBUILD_BUILD_ID"));
    }

    #[test]
    fn test_split_empty_parts() {
        assert!(split_build_id(":abc").is_err());
        assert!(split_build_id("proj:").is_err());
    }
}
