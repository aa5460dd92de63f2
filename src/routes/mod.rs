pub mod cache;
pub mod filter_dynamic;
pub mod filter_roles;
pub mod merge;
pub mod types;

pub use cache::collect_cache_routes;
pub use filter_dynamic::filter_auth_routes_by_dynamic;
pub use filter_roles::filter_auth_routes_by_roles;
pub use merge::merge_routes_by_parent;
pub use types::*;
