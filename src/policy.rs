//! Role policy: the single source of truth for which navigation items and
//! routes a role may see. Views and the router both consult this module
//! rather than re-deriving gating rules.

use crate::identity::Role;
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub admin_only: bool,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Static navigation table, in sidebar order.
pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Dashboard", route: Route::Dashboard, admin_only: false },
    NavItem { label: "File Manager", route: Route::Files, admin_only: false },
    NavItem { label: "User Management", route: Route::Users, admin_only: true },
    NavItem { label: "Settings", route: Route::Settings, admin_only: true },
];

/// Navigation items visible to the given role, preserving table order.
/// Every role sees Dashboard and File Manager; administrators additionally
/// see User Management and Settings.
pub fn visible_nav(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| !item.admin_only || role.is_admin())
        .collect()
}

/// Route-level gating: the same rule as `visible_nav` applied to resolution.
pub fn route_allowed(role: Role, route: Route) -> bool {
    NAV_ITEMS
        .iter()
        .any(|item| item.route == route && (!item.admin_only || role.is_admin()))
}
