// Asset domain model - dashboards and looks as seen on one instance
use std::fmt;

/// The kind of record a search or match was performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Dashboard,
    Look,
    Board,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Dashboard => "dashboard",
            AssetKind::Look => "look",
            AssetKind::Board => "board",
        };
        f.write_str(name)
    }
}

/// A dashboard or look. `id` is local to the instance it came from; `slug`
/// is the key that survives across instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: i64,
    pub slug: String,
    pub title: String,
}

impl Asset {
    pub fn new(id: i64, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
        }
    }
}
