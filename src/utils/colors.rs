/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Status color: red for a row/group with problems, green otherwise.
pub fn color_for_status(has_error: bool) -> &'static str {
    if has_error { RED } else { GREEN }
}

/// Wraps `value` in `color` when colors are enabled; blank values are greyed.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if !enabled {
        return value.to_string();
    }
    if value.trim().is_empty() || value.trim() == "--" {
        return format!("{GREY}{value}{RESET}");
    }
    format!("{color}{value}{RESET}")
}
