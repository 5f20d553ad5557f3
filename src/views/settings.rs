use crate::catalog::SETTINGS_SECTIONS;
use crate::identity::Principal;

use super::table_or_json;

/// Admin-only settings panels, one section per tab of the original console.
pub fn render(_principal: &Principal) -> String {
    let mut out = String::new();
    out.push_str("Settings\n");
    out.push_str("Server, storage, notification and security configuration.\n");

    for section in SETTINGS_SECTIONS.iter() {
        out.push_str(&format!("\n[{}]\n", section.title));
        out.push_str(&table_or_json(&["setting", "value"], &section.entries));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;

    #[test]
    fn renders_every_section() {
        let body = render(&Principal { username: "john.admin".into(), role: Role::Admin });
        for title in ["SFTP Server", "Cloud Storage", "Notifications", "Security"] {
            assert!(body.contains(&format!("[{}]", title)), "missing section {}", title);
        }
        assert!(body.contains("sftp.example-corp.com"));
        assert!(body.contains("AES-256"));
    }
}
