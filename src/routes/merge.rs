use std::collections::HashMap;

use super::types::{AuthRouteBatch, SingleAuthRoute};

/// Groups flattened route declarations into one batch per parent key.
///
/// Declarations sharing a parent are collected into a single
/// [`AuthRouteBatch`] in input order. The grouping map uses the literal key
/// `"null"` for a missing parent; the batch itself keeps `parent: None`.
/// The result is stable-sorted by parent, comparing a `None` parent as the
/// empty string, so top-level batches come first.
///
/// Pure and total: merging the same input twice yields the same output.
pub fn merge_routes_by_parent(data: &[SingleAuthRoute]) -> Vec<AuthRouteBatch> {
    let mut merged: Vec<AuthRouteBatch> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in data {
        let key = item
            .parent
            .clone()
            .unwrap_or_else(|| "null".to_string());

        let pos = *index.entry(key).or_insert_with(|| {
            merged.push(AuthRouteBatch {
                parent: item.parent.clone(),
                parent_path: item.parent_path.clone(),
                routes: Vec::new(),
            });
            merged.len() - 1
        });

        merged[pos].routes.push(item.route.clone());
    }

    merged.sort_by(|a, b| {
        let a_key = a.parent.as_deref().unwrap_or("");
        let b_key = b.parent.as_deref().unwrap_or("");
        a_key.cmp(b_key)
    });

    merged
}
