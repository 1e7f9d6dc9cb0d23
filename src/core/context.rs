//! Invocation context
//!
//! One immutable struct carrying the shared flags for a single invocation,
//! passed explicitly into each handler.

use crate::error::PathError;

/// Shared flags for one invocation, immutable once built
#[derive(Debug, Clone)]
pub struct EnvContext {
    /// Target distribution, e.g. "bookworm"
    pub distribution: String,
    /// Target architecture, e.g. "amd64"
    pub architecture: String,
    /// Optional disambiguating tag; derived from a hash when absent
    pub role: Option<String>,
    /// Overwrite an existing base archive (create only)
    pub force: bool,
}

impl EnvContext {
    /// Build a context, rejecting an empty distribution
    pub fn new(
        distribution: String,
        architecture: String,
        role: Option<String>,
        force: bool,
    ) -> Result<Self, PathError> {
        if distribution.is_empty() {
            return Err(PathError::EmptyDistribution);
        }
        Ok(Self {
            distribution,
            architecture,
            // An empty --role means "derive one"
            role: role.filter(|r| !r.is_empty()),
            force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_rejects_empty_distribution() {
        let result = EnvContext::new(String::new(), "amd64".to_string(), None, false);
        assert!(matches!(result, Err(PathError::EmptyDistribution)));
    }

    #[test]
    fn test_context_treats_empty_role_as_absent() {
        let ctx = EnvContext::new(
            "bookworm".to_string(),
            "amd64".to_string(),
            Some(String::new()),
            false,
        )
        .unwrap();
        assert!(ctx.role.is_none());
    }

    #[test]
    fn test_context_keeps_explicit_role() {
        let ctx = EnvContext::new(
            "bookworm".to_string(),
            "arm64".to_string(),
            Some("ci".to_string()),
            true,
        )
        .unwrap();
        assert_eq!(ctx.role.as_deref(), Some("ci"));
        assert!(ctx.force);
    }
}
