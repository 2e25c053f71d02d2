//! # Routes
//!
//! The current location as the header sees it: a path plus the optional id a
//! router would pull out of a detail route such as `/projects/42`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub id: Option<String>,
}

impl Route {
    /// A route whose id was already extracted by the caller.
    pub fn new(path: impl Into<String>, id: Option<String>) -> Self {
        Self {
            path: path.into(),
            id,
        }
    }

    /// Splits `path` into a route, extracting the id when the path is exactly
    /// one segment below `detail_parent`.
    ///
    /// Trailing slashes are dropped, so `/projects/` and `/projects` are the
    /// same route.
    pub fn parse(path: &str, detail_parent: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        let normalized = if normalized.is_empty() { "/" } else { normalized };

        let id = normalized
            .strip_prefix(detail_parent)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .map(str::to_string);

        Self {
            path: normalized.to_string(),
            id,
        }
    }

    /// The id to look up, if this is a detail route under `detail_parent`.
    pub fn detail_id(&self, detail_parent: &str) -> Option<&str> {
        let under_parent = self
            .path
            .strip_prefix(detail_parent)
            .is_some_and(|rest| rest.starts_with('/') && rest.len() > 1);
        if !under_parent {
            return None;
        }
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
