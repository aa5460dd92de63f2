use super::types::AuthRouteBatch;

/// Filters merged batches against a server-supplied path allow-list.
///
/// An index fragment is kept when the batch's `parent_path` is in the
/// allow-list; any other fragment is kept when its own declared `path`
/// segment is. The comparison is against the raw declared segment, not a
/// resolved absolute path, so the backend is expected to grant segments in
/// the same form the tree declares them. A pathless non-index fragment
/// compares as the empty string and is effectively never kept.
/// Batches left with no fragments are dropped. No role logic runs here.
pub fn filter_auth_routes_by_dynamic(
    batches: &[AuthRouteBatch],
    allowed_paths: &[String],
) -> Vec<AuthRouteBatch> {
    batches
        .iter()
        .map(|batch| {
            let filtered = batch
                .routes
                .iter()
                .filter(|fragment| {
                    if fragment.is_index
                        && allowed_paths.iter().any(|p| p == &batch.parent_path)
                    {
                        return true;
                    }

                    let path = fragment.path.as_deref().unwrap_or("");
                    allowed_paths.iter().any(|p| p == path)
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
