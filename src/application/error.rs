// Errors raised while matching, resolving and deploying boards
use crate::domain::asset::AssetKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    /// A search that must yield exactly one record yielded `found` instead.
    #[error("expected exactly one {kind} matching '{key}', found {found}")]
    AmbiguousMatch {
        kind: AssetKind,
        key: String,
        found: usize,
    },

    /// The target is in a state the deploy refuses to guess about.
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("board '{0}' not found on source instance")]
    BoardNotFound(String),

    #[error(
        "board '{title}' references {dashboards} unmatched dashboard(s) and {looks} unmatched look(s); rerun with --allow-partial to deploy anyway"
    )]
    MissingContent {
        title: String,
        dashboards: usize,
        looks: usize,
    },

    #[error(transparent)]
    Api(#[from] anyhow::Error),
}

impl DeployError {
    /// True for failures that mean "this asset has no unique counterpart".
    pub fn is_match_failure(&self) -> bool {
        matches!(self, DeployError::AmbiguousMatch { .. })
    }
}

/// Exactly one result or an [`DeployError::AmbiguousMatch`].
pub fn require_unique<T>(mut results: Vec<T>, kind: AssetKind, key: &str) -> Result<T, DeployError> {
    if results.len() != 1 {
        return Err(DeployError::AmbiguousMatch {
            kind,
            key: key.to_string(),
            found: results.len(),
        });
    }
    Ok(results.remove(0))
}

/// Like [`require_unique`], but zero results is a valid `None`.
pub fn find_unique<T>(results: Vec<T>, kind: AssetKind, key: &str) -> Result<Option<T>, DeployError> {
    if results.is_empty() {
        return Ok(None);
    }
    require_unique(results, kind, key).map(Some)
}
