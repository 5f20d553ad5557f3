use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sftman::console::Console;

fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    let title = std::env::var("SFTMAN_TITLE").unwrap_or_else(|_| "SFTP Manager".to_string());
    let output = std::env::var("SFTMAN_OUTPUT").unwrap_or_else(|_| "table".to_string());
    info!(
        target: "sftman",
        "sftman starting: RUST_LOG='{}', title='{}', output={}, operator='{}'",
        rust_log, title, output, whoami::username()
    );

    Console::new(title).run()
}
