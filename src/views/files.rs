use crate::catalog::{BROWSE_PATH, FILES, FOLDERS};
use crate::identity::Principal;

use super::table_or_json;

pub fn render(_principal: &Principal) -> String {
    let mut out = String::new();
    out.push_str("File Manager\n");
    out.push_str(&format!("Path: {}\n\n", BROWSE_PATH));

    out.push_str(&format!("Folders ({})\n", FOLDERS.len()));
    out.push_str(&table_or_json(&["name", "files", "modified"], &FOLDERS));
    out.push('\n');

    out.push_str(&format!("\nFiles ({})\n", FILES.len()));
    out.push_str(&table_or_json(
        &["name", "size", "kind", "modified", "shared"],
        &FILES,
    ));
    out.push('\n');
    out
}
