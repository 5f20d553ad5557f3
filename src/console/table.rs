use serde_json::Value;
use terminal_size::{terminal_size, Width};

/// Render an array of JSON objects as a bordered ASCII table with the given
/// column order. Returns `None` when there are no rows, or when
/// `SFTMAN_OUTPUT=json` asks for raw JSON instead; callers then fall back to
/// pretty-printed JSON.
pub fn render_table(columns: &[&str], rows: &Value) -> Option<String> {
    if std::env::var("SFTMAN_OUTPUT").map(|v| v.eq_ignore_ascii_case("json")).unwrap_or(false) {
        return None;
    }
    let arr = rows.as_array()?;
    if arr.is_empty() || columns.is_empty() {
        return None;
    }

    let cells: Vec<Vec<String>> = arr
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| row.get(*c).map(to_cell_string).unwrap_or_default())
                .collect()
        })
        .collect();

    // Cap every column at the detected terminal width so one long cell
    // cannot wrap the whole table.
    let termw = get_terminal_width();
    let mut widths: Vec<usize> = columns.iter().map(|c| display_len(c).min(termw)).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate().take(columns.len()) {
            let w = display_len(cell);
            if w > widths[i] {
                widths[i] = w.min(termw);
            }
        }
    }

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let sep = build_separator(&widths);
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&build_row(&header, &widths));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&build_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!("rows: {}, cols: {}", cells.len(), columns.len()));
    Some(out)
}

fn get_terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).max(40),
        None => 120,
    }
}

fn to_cell_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => if *b { "yes".to_string() } else { "no".to_string() },
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(to_cell_string).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn display_len(s: &str) -> usize {
    s.chars().count()
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('+');
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let (text, align_right) = (truncate(&cell, *w), is_numeric_like(&cell));
        s.push(' ');
        if align_right {
            let pad = w.saturating_sub(display_len(&text));
            s.push_str(&" ".repeat(pad));
            s.push_str(&text);
        } else {
            s.push_str(&text);
            let pad = w.saturating_sub(display_len(&text));
            s.push_str(&" ".repeat(pad));
        }
        s.push(' ');
        s.push('|');
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }
    s.chars().take(max - 1).collect::<String>() + "…"
}

fn is_numeric_like(s: &str) -> bool {
    // crude detection for aligning numbers to the right
    let st = s.trim();
    if st.is_empty() {
        return false;
    }
    let mut has_digit = false;
    for ch in st.chars() {
        if ch.is_ascii_digit() {
            has_digit = true;
            continue;
        }
        if ".-+eE,_".contains(ch) {
            continue;
        }
        return false;
    }
    has_digit
}
