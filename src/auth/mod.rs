use serde::{Deserialize, Serialize};

use crate::grant::RouteGrantClient;
use crate::routes::{
    filter_auth_routes_by_dynamic, filter_auth_routes_by_roles, merge_routes_by_parent,
    RouteFragment, SingleAuthRoute,
};
use crate::session::SessionContext;

/// Authorization strategy, resolved once at startup from configuration.
/// The exact string `"static"` selects static mode; any other value is
/// treated as dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Static,
    Dynamic,
}

impl From<&str> for AuthMode {
    fn from(value: &str) -> Self {
        match value {
            "static" => AuthMode::Static,
            _ => AuthMode::Dynamic,
        }
    }
}

/// Result of one authorization run. A failed grant fetch is reported here
/// rather than propagated as an error: the application keeps running with
/// its prior navigation state and may surface the failure to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRouteOutcome {
    /// Number of batches handed to the registration callback.
    Registered(usize),
    /// Dynamic-mode grant fetch failed; nothing was registered.
    GrantFetchFailed,
}

/// Computes and registers the navigable routes for the current session.
///
/// Merges the declared tree, then either filters it by the session's roles
/// (static mode, with a super-admin bypass that registers everything) or by
/// the backend's per-session allow-list (dynamic mode, which also publishes
/// the server-declared home path). `add_routes` is invoked once per
/// surviving batch, in merged order.
pub async fn init_auth_routes<F>(
    mode: AuthMode,
    declared: &[SingleAuthRoute],
    session: &dyn SessionContext,
    grant: &dyn RouteGrantClient,
    mut add_routes: F,
) -> AuthRouteOutcome
where
    F: FnMut(Option<&str>, Vec<RouteFragment>),
{
    let merged = merge_routes_by_parent(declared);
    let identity = session.identity();

    match mode {
        AuthMode::Static => {
            let batches = if identity.is_super_admin {
                // Super-admin bypass: the full declared tree, unfiltered.
                merged
            } else {
                filter_auth_routes_by_roles(&merged, &identity.roles)
            };

            let count = batches.len();
            for batch in batches {
                add_routes(batch.parent.as_deref(), batch.routes);
            }
            AuthRouteOutcome::Registered(count)
        }
        AuthMode::Dynamic => {
            let grant = match grant.fetch_user_routes().await {
                Ok(grant) => grant,
                Err(e) => {
                    tracing::error!("failed to fetch user routes: {}", e);
                    return AuthRouteOutcome::GrantFetchFailed;
                }
            };

            // Home path goes out before filtering so the default-landing
            // logic sees it even when no batch survives.
            session.set_home_path(grant.home);

            let batches = filter_auth_routes_by_dynamic(&merged, &grant.routes);
            let count = batches.len();
            for batch in batches {
                add_routes(batch.parent.as_deref(), batch.routes);
            }
            AuthRouteOutcome::Registered(count)
        }
    }
}
