//! Subview rendering. Every view is a pure function from the signed-in
//! principal (plus the demo catalog) to text; the command loop decides when
//! to print. Role-conditional content always goes through the policy module.

pub mod dashboard;
pub mod files;
pub mod login;
pub mod settings;
pub mod users;

use serde::Serialize;
use serde_json::Value;

use crate::console::render_table;
use crate::identity::Principal;
use crate::policy;
use crate::router::Route;

pub fn render_route(route: Route, principal: &Principal) -> String {
    match route {
        Route::Dashboard => dashboard::render(principal),
        Route::Files => files::render(principal),
        Route::Users => users::render(principal),
        Route::Settings => settings::render(principal),
    }
}

/// Authenticated chrome around a subview: brand line, role label, and the
/// navigation visible to the current role with the active route marked.
pub fn layout(title: &str, principal: &Principal, route: Route, body: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} | signed in as {} ({})\n",
        title, principal.username, principal.role.label()
    ));
    let nav = policy::visible_nav(principal.role)
        .iter()
        .map(|item| {
            if item.route == route {
                format!("[{}]", item.label)
            } else {
                format!(" {} ", item.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("nav: {}\n", nav));
    out.push_str("(GO <path> to navigate, LOGOUT to sign out)\n\n");
    out.push_str(body);
    out
}

/// Serialize rows and render them as a table, falling back to pretty JSON
/// when table output is suppressed.
pub(crate) fn table_or_json<T: Serialize>(columns: &[&str], rows: &[T]) -> String {
    let val = serde_json::to_value(rows).unwrap_or(Value::Null);
    match render_table(columns, &val) {
        Some(t) => t,
        None => serde_json::to_string_pretty(&val).unwrap_or_else(|_| val.to_string()),
    }
}
