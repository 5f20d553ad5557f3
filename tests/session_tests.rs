//! Session lifecycle tests: login/logout round trips, last-write-wins on
//! re-login, and the mock credential contract.

use sftman::error::AppError;
use sftman::identity::{DemoAuthProvider, LoginRequest, Role, SessionController};

fn req(role: Role, user: &str, pass: &str) -> LoginRequest {
    LoginRequest { username: user.into(), password: pass.into(), role }
}

#[test]
fn login_sets_session_with_requested_role() {
    let mut ctl = SessionController::new();
    assert!(!ctl.is_authenticated());

    let sess = ctl
        .login(&DemoAuthProvider, &req(Role::Client, "client.acme", "pw"))
        .expect("non-empty credentials must sign in");
    assert_eq!(sess.principal.username, "client.acme");
    assert_eq!(sess.principal.role, Role::Client);
    assert!(!sess.session_id.is_empty());
    assert!(ctl.is_authenticated());
}

#[test]
fn login_then_logout_returns_to_initial_state() {
    let mut ctl = SessionController::new();
    ctl.login(&DemoAuthProvider, &req(Role::Admin, "john.admin", "pw"))
        .expect("login");
    ctl.logout();
    assert!(!ctl.is_authenticated());
    assert!(ctl.current().is_none(), "no session state may survive logout");
}

#[test]
fn logout_is_idempotent() {
    let mut ctl = SessionController::new();
    ctl.logout();
    ctl.logout();
    assert!(!ctl.is_authenticated());

    ctl.login(&DemoAuthProvider, &req(Role::User, "sarah.user", "pw"))
        .expect("login");
    ctl.logout();
    ctl.logout();
    assert!(ctl.current().is_none());
}

#[test]
fn relogin_without_logout_is_last_write_wins() {
    let mut ctl = SessionController::new();
    let first_id = ctl
        .login(&DemoAuthProvider, &req(Role::Admin, "john.admin", "pw"))
        .expect("first login")
        .session_id
        .clone();

    let sess = ctl
        .login(&DemoAuthProvider, &req(Role::Vendor, "vendor.supply", "pw"))
        .expect("second login");
    assert_eq!(sess.principal.role, Role::Vendor);
    assert_eq!(sess.principal.username, "vendor.supply");
    assert_ne!(sess.session_id, first_id, "a re-login must issue a fresh session");

    let current = ctl.current().expect("session present");
    assert_eq!(current.principal.role, Role::Vendor, "no residue from the prior role");
}

#[test]
fn empty_credentials_fail_with_invalid_credentials() {
    let mut ctl = SessionController::new();
    for (user, pass) in [("", "pw"), ("u", ""), ("", "")] {
        let err = ctl
            .login(&DemoAuthProvider, &req(Role::User, user, pass))
            .expect_err("empty credentials must be rejected");
        match err {
            AppError::Auth { ref code, .. } => assert_eq!(code, "invalid_credentials"),
            other => panic!("expected Auth error, got {}", other),
        }
        assert!(!ctl.is_authenticated(), "failed login must not create a session");
    }
}

#[test]
fn failed_relogin_keeps_prior_session() {
    let mut ctl = SessionController::new();
    ctl.login(&DemoAuthProvider, &req(Role::Admin, "john.admin", "pw"))
        .expect("login");
    let before = ctl.current().expect("session").session_id.clone();

    ctl.login(&DemoAuthProvider, &req(Role::Vendor, "", ""))
        .expect_err("empty credentials must be rejected");
    let after = ctl.current().expect("session still present");
    assert_eq!(after.session_id, before, "a rejected login must not disturb the session");
    assert_eq!(after.principal.role, Role::Admin);
}
