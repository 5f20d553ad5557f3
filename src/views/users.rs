use crate::catalog::USER_DIRECTORY;
use crate::identity::Principal;

use super::table_or_json;

/// Admin-only user directory. The router guarantees only administrators
/// reach this view; the rendering itself does not re-check.
pub fn render(_principal: &Principal) -> String {
    let mut out = String::new();
    out.push_str("User Management\n");
    out.push_str("Manage user accounts, roles, and permissions.\n\n");

    out.push_str(&table_or_json(
        &["username", "email", "role", "status", "last_login", "created_at", "permissions"],
        &USER_DIRECTORY,
    ));
    out.push('\n');

    let active = USER_DIRECTORY.iter().filter(|u| u.status == "active").count();
    out.push_str(&format!(
        "\n{} accounts, {} active\n",
        USER_DIRECTORY.len(),
        active
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;

    #[test]
    fn lists_the_demo_directory() {
        let body = render(&Principal { username: "john.admin".into(), role: Role::Admin });
        for name in ["john.admin", "sarah.user", "client.acme", "vendor.supply"] {
            assert!(body.contains(name), "missing account {}", name);
        }
        assert!(body.contains("4 accounts, 3 active"));
    }
}
