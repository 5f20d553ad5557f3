use crate::identity::Role;

/// Sign-in screen shown whenever no session is active.
pub fn render(title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title));
    out.push_str("Secure File Transfer Protocol\n\n");
    out.push_str("Sign In\n");
    out.push_str("Choose your role and enter your credentials:\n");
    for role in Role::ALL {
        out.push_str(&format!("  {:<8}{}\n", role.as_str(), role.label()));
    }
    out.push_str("\nusage: LOGIN <role> <username> <password>\n");
    out.push_str("End-to-end encryption enabled.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_role_with_label() {
        let screen = render("SFTP Manager");
        for role in Role::ALL {
            assert!(screen.contains(role.as_str()), "missing wire value {}", role);
            assert!(screen.contains(role.label()), "missing label {}", role.label());
        }
        assert!(screen.contains("LOGIN <role> <username> <password>"));
    }
}
