use crate::catalog::{RECENT_ACTIVITY, STORAGE_USAGE, TRANSFER_STATS};
use crate::identity::Principal;

use super::table_or_json;

pub fn render(principal: &Principal) -> String {
    let mut out = String::new();
    out.push_str("Dashboard\n");
    out.push_str("Welcome back! Here's your SFTP overview. [secure session active]\n\n");

    out.push_str(&format!(
        "Storage Used      : {} GB of {} GB ({}%)\n",
        STORAGE_USAGE.used_gb, STORAGE_USAGE.total_gb, STORAGE_USAGE.percent
    ));
    out.push_str(&format!(
        "Total Files       : {} (+12% from last month)\n",
        TRANSFER_STATS.total_files
    ));
    if principal.role.is_admin() {
        out.push_str(&format!(
            "Active Users      : {} currently online\n",
            TRANSFER_STATS.active_users
        ));
    }
    out.push_str(&format!(
        "Today's Transfers : {} files uploaded/downloaded\n",
        TRANSFER_STATS.transfers_today
    ));
    out.push_str(&format!(
        "Security Alerts   : {}\n\n",
        TRANSFER_STATS.security_alerts
    ));

    out.push_str("Recent Activity (latest file operations and transfers)\n");
    out.push_str(&table_or_json(
        &["action", "file", "user", "when", "status"],
        &RECENT_ACTIVITY,
    ));
    out.push('\n');

    out.push_str("\nQuick Actions\n");
    out.push_str("  Upload Files      - add new files to your storage\n");
    out.push_str("  Browse Files      - navigate your file system\n");
    if principal.role.is_admin() {
        out.push_str("  Manage Users      - add or modify user accounts\n");
    }
    out.push_str("  Security Settings - configure security options\n");

    out.push_str("\nSecurity Status\n");
    out.push_str("  * SSL/TLS Encryption Active\n");
    out.push_str("  * Two-Factor Authentication\n");
    out.push_str("  * Audit Logging Enabled\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;

    fn principal(role: Role) -> Principal {
        Principal { username: "t".into(), role }
    }

    #[test]
    fn active_users_stat_is_admin_only() {
        let admin = render(&principal(Role::Admin));
        assert!(admin.contains("Active Users"));
        assert!(admin.contains("Manage Users"));
        for role in [Role::User, Role::Client, Role::Vendor] {
            let body = render(&principal(role));
            assert!(!body.contains("Active Users"), "{} must not see the admin stat", role);
            assert!(!body.contains("Manage Users"), "{} must not see the admin action", role);
        }
    }

    #[test]
    fn shows_storage_and_activity_for_every_role() {
        for role in Role::ALL {
            let body = render(&principal(role));
            assert!(body.contains("750 GB of 1000 GB (75%)"));
            assert!(body.contains("quarterly-report.pdf"));
        }
    }
}
