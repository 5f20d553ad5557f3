//! Subview routing for the authenticated layout. Paths resolve to one of the
//! four routes; anything unknown or not permitted for the current role falls
//! back to the dashboard, with the reason made explicit on the resolution so
//! the front end can surface it instead of redirecting silently.

use serde::{Deserialize, Serialize};

use crate::identity::Role;
use crate::policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Files,
    Users,
    Settings,
}

pub const DEFAULT_ROUTE: Route = Route::Dashboard;

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Files => "/files",
            Route::Users => "/users",
            Route::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Files => "File Manager",
            Route::Users => "User Management",
            Route::Settings => "Settings",
        }
    }

    /// Exact path match; a single trailing slash is tolerated.
    pub fn parse(path: &str) -> Option<Route> {
        let p = path.trim();
        let p = if p.len() > 1 { p.trim_end_matches('/') } else { p };
        match p {
            "/dashboard" => Some(Route::Dashboard),
            "/files" => Some(Route::Files),
            "/users" => Some(Route::Users),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }
}

/// Why a resolution landed somewhere other than the requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// "/" or empty path; the layout's default landing.
    Root,
    /// No route is bound to the requested path.
    UnknownPath,
    /// The route exists but the role is not permitted to open it.
    Unauthorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    pub redirect: Option<Redirect>,
}

impl Resolution {
    fn direct(route: Route) -> Self {
        Self { route, redirect: None }
    }

    fn fallback(reason: Redirect) -> Self {
        Self { route: DEFAULT_ROUTE, redirect: Some(reason) }
    }
}

/// Resolve a requested path for an authenticated role. Never fails: unknown
/// and unauthorized paths both land on the dashboard, distinguished by the
/// redirect reason.
pub fn resolve(role: Role, path: &str) -> Resolution {
    let trimmed = path.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return Resolution::fallback(Redirect::Root);
    }
    match Route::parse(trimmed) {
        None => {
            tracing::debug!(path = trimmed, "router.unknown_path");
            Resolution::fallback(Redirect::UnknownPath)
        }
        Some(route) if !policy::route_allowed(role, route) => {
            tracing::warn!(path = trimmed, %role, "router.unauthorized");
            Resolution::fallback(Redirect::Unauthorized)
        }
        Some(route) => Resolution::direct(route),
    }
}
