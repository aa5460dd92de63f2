use super::types::RouteFragment;

/// Collects the paths of every fragment marked `keep_alive`, walking the
/// tree depth-first. Fragments without a path are traversed for their
/// children but contribute no path themselves.
pub fn collect_cache_routes(routes: &[RouteFragment]) -> Vec<String> {
    let mut cache_routes = Vec::new();

    for route in routes {
        match route.path.as_deref() {
            Some(path) if !path.is_empty() => {
                if route.handle.keep_alive {
                    cache_routes.push(path.to_string());
                }
                if !route.children.is_empty() {
                    cache_routes.extend(collect_cache_routes(&route.children));
                }
            }
            _ => {
                // Pathless grouping node: only its children matter.
                if !route.children.is_empty() {
                    cache_routes.extend(collect_cache_routes(&route.children));
                }
            }
        }
    }

    cache_routes
}
