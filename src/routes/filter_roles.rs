use super::types::AuthRouteBatch;

/// Filters merged batches down to the fragments the user's roles allow.
///
/// The first fragment of a batch gets special treatment when it is an index
/// route: if it requires roles the user lacks, the whole batch is emptied
/// immediately, because an index route gates its entire group. Otherwise
/// each fragment is kept iff its role list is empty or intersects `roles`.
/// Batches left with no fragments are dropped from the output.
pub fn filter_auth_routes_by_roles(
    batches: &[AuthRouteBatch],
    roles: &[String],
) -> Vec<AuthRouteBatch> {
    batches
        .iter()
        .map(|batch| {
            // Index-route gate: checked before any per-fragment filtering.
            if let Some(first) = batch.routes.first() {
                if first.is_index {
                    let route_roles = &first.handle.roles;
                    let has_permission = route_roles.iter().any(|r| roles.contains(r));

                    if !route_roles.is_empty() && !has_permission {
                        return AuthRouteBatch {
                            parent: batch.parent.clone(),
                            parent_path: batch.parent_path.clone(),
                            routes: Vec::new(),
                        };
                    }
                }
            }

            let filtered = batch
                .routes
                .iter()
                .filter(|fragment| {
                    let route_roles = &fragment.handle.roles;

                    // A fragment with no role restriction is always visible.
                    let is_empty_roles = route_roles.is_empty();
                    let has_permission = route_roles.iter().any(|r| roles.contains(r));

                    has_permission || is_empty_roles
                })
                .cloned()
                .collect();

            AuthRouteBatch {
                parent: batch.parent.clone(),
                parent_path: batch.parent_path.clone(),
                routes: filtered,
            }
        })
        .filter(|batch| !batch.routes.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::types::RouteFragment;

    fn batch(parent: &str, parent_path: &str, routes: Vec<RouteFragment>) -> AuthRouteBatch {
        AuthRouteBatch {
            parent: Some(parent.to_string()),
            parent_path: parent_path.to_string(),
            routes,
        }
    }

    fn roles(list: &[&str]) -> Vec<String> {
        list.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn drops_restricted_fragment_and_keeps_unrestricted_one() {
        let batches = vec![batch(
            "manage",
            "/manage",
            vec![
                RouteFragment::new("user").with_roles(&["admin"]),
                RouteFragment::new("role"),
            ],
        )];

        let filtered = filter_auth_routes_by_roles(&batches, &roles(&["editor"]));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].parent.as_deref(), Some("manage"));
        assert_eq!(filtered[0].routes.len(), 1);
        assert_eq!(filtered[0].routes[0].path.as_deref(), Some("role"));
    }

    #[test]
    fn keeps_fragment_when_any_role_matches() {
        let batches = vec![batch(
            "manage",
            "/manage",
            vec![RouteFragment::new("user").with_roles(&["admin", "editor"])],
        )];

        let filtered = filter_auth_routes_by_roles(&batches, &roles(&["editor"]));
        assert_eq!(filtered[0].routes.len(), 1);
    }

    #[test]
    fn unrestricted_fragments_survive_empty_role_set() {
        let batches = vec![batch(
            "manage",
            "/manage",
            vec![RouteFragment::new("role")],
        )];

        let filtered = filter_auth_routes_by_roles(&batches, &[]);
        assert_eq!(filtered[0].routes.len(), 1);
    }

    #[test]
    fn restricted_index_route_empties_the_whole_batch() {
        // Sibling fragments would individually pass, but the index gate
        // hides the group before per-fragment filtering runs.
        let batches = vec![batch(
            "manage",
            "/manage",
            vec![
                RouteFragment::index().with_roles(&["admin"]),
                RouteFragment::new("role"),
            ],
        )];

        let filtered = filter_auth_routes_by_roles(&batches, &roles(&["editor"]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn unrestricted_index_route_does_not_gate_the_batch() {
        let batches = vec![batch(
            "manage",
            "/manage",
            vec![
                RouteFragment::index(),
                RouteFragment::new("user").with_roles(&["admin"]),
                RouteFragment::new("role"),
            ],
        )];

        let filtered = filter_auth_routes_by_roles(&batches, &roles(&["editor"]));

        let paths: Vec<_> = filtered[0].routes.iter().map(|r| r.path.as_deref()).collect();
        assert_eq!(paths, vec![None, Some("role")]);
        assert!(filtered[0].routes[0].is_index);
    }

    #[test]
    fn index_gate_only_applies_to_the_first_fragment() {
        let batches = vec![batch(
            "manage",
            "/manage",
            vec![
                RouteFragment::new("role"),
                RouteFragment::index().with_roles(&["admin"]),
            ],
        )];

        let filtered = filter_auth_routes_by_roles(&batches, &roles(&["editor"]));

        // The non-leading index route is filtered like any other fragment.
        assert_eq!(filtered[0].routes.len(), 1);
        assert_eq!(filtered[0].routes[0].path.as_deref(), Some("role"));
    }

    #[test]
    fn batches_with_no_surviving_fragments_are_dropped() {
        let batches = vec![
            batch(
                "manage",
                "/manage",
                vec![RouteFragment::new("user").with_roles(&["admin"])],
            ),
            batch("agents", "/agents", vec![RouteFragment::new("list")]),
        ];

        let filtered = filter_auth_routes_by_roles(&batches, &roles(&["editor"]));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].parent.as_deref(), Some("agents"));
    }
}
