// Status and execution-type badges, as HTML fragments or terminal text

use crate::models::{exec_type_class, exec_type_label, status_label, ExecStatus, ExecType, Locale};
use crate::utils::escape_html;

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// `<span class="status-badge {status}">{label}</span>`
///
/// The raw status doubles as the class suffix, so unknown statuses still render.
pub fn status_badge_html(status: &str) -> String {
    status_badge_html_in(status, Locale::ZhCn)
}

pub fn status_badge_html_in(status: &str, locale: Locale) -> String {
    format!(
        "<span class=\"status-badge {}\">{}</span>",
        escape_html(status),
        escape_html(status_label(status, locale))
    )
}

/// `<span class="badge {badge-plan|badge-cli|badge-task}">{label}</span>`
pub fn exec_type_badge_html(exec_type: &str) -> String {
    exec_type_badge_html_in(exec_type, Locale::ZhCn)
}

pub fn exec_type_badge_html_in(exec_type: &str, locale: Locale) -> String {
    format!(
        "<span class=\"badge {}\">{}</span>",
        exec_type_class(exec_type),
        escape_html(exec_type_label(exec_type, locale))
    )
}

fn status_color(status: &str) -> Option<&'static str> {
    match ExecStatus::from_str(status)? {
        ExecStatus::Success => Some(ANSI_FG_GREEN),
        ExecStatus::Failed | ExecStatus::Error | ExecStatus::Timeout => Some(ANSI_FG_RED),
        ExecStatus::Running => Some(ANSI_FG_BLUE),
        ExecStatus::Pending => Some(ANSI_FG_YELLOW),
        ExecStatus::Cancelled | ExecStatus::Skipped => Some(ANSI_FG_BRIGHT_BLACK),
    }
}

fn exec_type_color(exec_type: &str) -> &'static str {
    match ExecType::from_str(exec_type) {
        Some(ExecType::Plan) => ANSI_FG_MAGENTA,
        Some(ExecType::Cli) => ANSI_FG_CYAN,
        _ => ANSI_FG_BLUE,
    }
}

fn paint(text: &str, color: Option<&str>, use_color: bool) -> String {
    match color {
        Some(color) if use_color => format!("{}{}{}", color, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

/// Status label for terminal output, colored when `use_color` is set
pub fn status_badge_ansi(status: &str, locale: Locale, use_color: bool) -> String {
    paint(status_label(status, locale), status_color(status), use_color)
}

/// Execution-type label for terminal output, colored when `use_color` is set
pub fn exec_type_badge_ansi(exec_type: &str, locale: Locale, use_color: bool) -> String {
    paint(exec_type_label(exec_type, locale), Some(exec_type_color(exec_type)), use_color)
}
