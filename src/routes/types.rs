use serde::{Deserialize, Serialize};

/// Metadata attached to a route fragment by the declared route tree.
///
/// `roles` is the set of role identifiers allowed to see the fragment in
/// static mode; an empty list means no restriction. `keep_alive` marks the
/// fragment's page for component caching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteMeta {
    pub roles: Vec<String>,
    pub keep_alive: bool,
}

/// One node of the declared route tree.
///
/// A fragment without a `path` is a grouping node with no navigable URL of
/// its own. An index fragment renders at its parent's exact path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteFragment {
    pub path: Option<String>,
    #[serde(rename = "index")]
    pub is_index: bool,
    pub children: Vec<RouteFragment>,
    pub handle: RouteMeta,
}

impl RouteFragment {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn index() -> Self {
        Self {
            is_index: true,
            ..Self::default()
        }
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.handle.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }
}

/// One flattened declaration linking a parent key to a single route fragment.
///
/// `parent` is `None` for top-level routes. Declared at build time and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleAuthRoute {
    pub parent: Option<String>,
    pub parent_path: String,
    pub route: RouteFragment,
}

/// All route fragments sharing one parent key, merged into a single entry.
///
/// Produced by [`merge_routes_by_parent`](crate::routes::merge_routes_by_parent);
/// batches are ordered by parent with a `None` parent comparing as the empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRouteBatch {
    pub parent: Option<String>,
    pub parent_path: String,
    pub routes: Vec<RouteFragment>,
}
