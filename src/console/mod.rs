//! Terminal front end: table rendering plus the interactive command loop.

pub mod repl;
pub mod table;

pub use repl::Console;
pub use table::render_table;
