//! Interactive command loop. Single-threaded: every state transition happens
//! synchronously while handling one line of input.

use std::io::{self, Write};

use anyhow::Result;

use crate::error::AppError;
use crate::identity::{DemoAuthProvider, LoginRequest, Role, SessionController};
use crate::router::{self, Redirect, Route, DEFAULT_ROUTE};
use crate::views;

fn print_usage() {
    eprintln!(
        "Commands:\n  login <role> <username> <password>   sign in (roles: admin | user | client | vendor)\n  logout                               sign out and return to the sign-in screen\n  go <path>                            open a view (/dashboard /files /users /settings)\n  nav                                  list the views visible to your role\n  status                               show session and current view\n  help                                 show this help\n  quit | exit                          leave the console\n\nA bare path such as /files is treated as 'go /files'."
    );
}

pub struct Console {
    title: String,
    controller: SessionController,
    provider: DemoAuthProvider,
    route: Route,
}

impl Console {
    pub fn new(title: String) -> Self {
        Self {
            title,
            controller: SessionController::new(),
            provider: DemoAuthProvider,
            route: DEFAULT_ROUTE,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{} console. Type 'help' for commands.", self.title);
        self.show_current();

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut input = String::new();
        loop {
            input.clear();
            print!("> ");
            let _ = stdout.flush();
            if stdin.read_line(&mut input).is_err() {
                break;
            }
            if input.is_empty() {
                // EOF
                break;
            }
            let line = input.trim();
            if line.is_empty() {
                continue;
            }
            let up = line.to_uppercase();
            if up == "EXIT" || up == "QUIT" {
                break;
            }
            if up == "HELP" {
                print_usage();
                continue;
            }
            if up == "STATUS" {
                self.show_status();
                continue;
            }
            if up.starts_with("LOGIN ") || up == "LOGIN" {
                self.handle_login(line);
                continue;
            }
            if up == "LOGOUT" {
                self.controller.logout();
                self.route = DEFAULT_ROUTE;
                println!("signed out");
                self.show_current();
                continue;
            }
            if up == "NAV" {
                self.show_nav();
                continue;
            }
            if up == "GO" {
                eprintln!("usage: go <path>");
                continue;
            }
            if let Some(rest) = strip_keyword(line, "GO") {
                self.handle_go(rest);
                continue;
            }
            if line.starts_with('/') {
                self.handle_go(line);
                continue;
            }
            eprintln!("unrecognized command: {} (type 'help')", line);
        }
        Ok(())
    }

    fn show_current(&self) {
        match self.controller.current() {
            Some(sess) => {
                let body = views::render_route(self.route, &sess.principal);
                println!("{}", views::layout(&self.title, &sess.principal, self.route, &body));
            }
            None => println!("{}", views::login::render(&self.title)),
        }
    }

    fn show_status(&self) {
        match self.controller.current() {
            Some(sess) => println!(
                "signed in: {} ({})\n  session: {}\n  issued:  {}\n  view:    {}",
                sess.principal.username,
                sess.principal.role.label(),
                sess.session_id,
                sess.issued_at.to_rfc3339(),
                self.route.path()
            ),
            None => println!("signed out"),
        }
    }

    fn show_nav(&self) {
        match self.controller.current() {
            Some(sess) => {
                for item in crate::policy::visible_nav(sess.principal.role) {
                    println!("  {:<16} {}", item.label, item.path());
                }
            }
            None => {
                println!("sign in first");
                println!("{}", views::login::render(&self.title));
            }
        }
    }

    fn handle_login(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            eprintln!("usage: login <role> <username> <password>");
            return;
        }
        let Some(role) = Role::parse(parts[1]) else {
            let err = AppError::user(
                "unknown_role",
                format!("unknown role '{}' (expected admin | user | client | vendor)", parts[1]),
            );
            eprintln!("Error: {}", err);
            return;
        };
        let req = LoginRequest {
            username: parts[2].to_string(),
            password: parts[3].to_string(),
            role,
        };
        match self.controller.login(&self.provider, &req) {
            Ok(sess) => {
                println!("welcome, {} ({})", sess.principal.username, sess.principal.role.label());
                self.route = DEFAULT_ROUTE;
                self.show_current();
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn handle_go(&mut self, path: &str) {
        let Some(sess) = self.controller.current() else {
            println!("sign in first");
            println!("{}", views::login::render(&self.title));
            return;
        };
        let res = router::resolve(sess.principal.role, path);
        match res.redirect {
            Some(Redirect::Unauthorized) => {
                println!("access to {} is restricted; showing {}", path.trim(), res.route.title());
            }
            Some(Redirect::UnknownPath) => {
                println!("no view at {}; showing {}", path.trim(), res.route.title());
            }
            Some(Redirect::Root) | None => {}
        }
        self.route = res.route;
        self.show_current();
    }
}

/// Case-insensitive keyword prefix match, returning the trimmed remainder.
fn strip_keyword<'a>(line: &'a str, kw: &str) -> Option<&'a str> {
    let (head, rest) = line.split_once(char::is_whitespace)?;
    if head.eq_ignore_ascii_case(kw) {
        Some(rest.trim())
    } else {
        None
    }
}
