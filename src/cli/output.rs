// Output formatting for job listings

use crate::models::{exec_type_label, status_label, JobRecord, Locale};
use crate::utils::{escape_html, format_time_ago_in};
use crate::view::{exec_type_badge_ansi, exec_type_badge_html_in, status_badge_ansi, status_badge_html_in};
use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

const COLUMN_GAP: &str = "  ";
/// The task column never shrinks below this when fitting the terminal
const MIN_TASK_WIDTH: usize = 8;

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, falling back to COLUMNS and then 120
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

#[derive(Debug, Clone)]
pub struct JobTableOptions {
    pub locale: Locale,
    pub use_color: bool,
    pub max_width: usize,
}

impl Default for JobTableOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            use_color: false,
            max_width: 120,
        }
    }
}

fn headers(locale: Locale) -> [&'static str; 6] {
    match locale {
        Locale::ZhCn => ["ID", "任务", "类型", "状态", "耗时", "开始"],
        Locale::En => ["ID", "Task", "Type", "Status", "Duration", "Started"],
    }
}

/// Pad by display width so CJK labels line up
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Truncate to a display width, marking the cut with ".."
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(2);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    format!("{}..", out)
}

/// Format job records as an aligned text table
pub fn format_jobs_table(jobs: &[JobRecord], options: &JobTableOptions) -> String {
    let locale = options.locale;
    if jobs.is_empty() {
        return match locale {
            Locale::ZhCn => "没有执行记录。\n".to_string(),
            Locale::En => "No jobs.\n".to_string(),
        };
    }

    let header = headers(locale);
    let rows: Vec<[String; 6]> = jobs
        .iter()
        .map(|job| {
            [
                job.id.clone(),
                job.task.clone(),
                exec_type_label(&job.exec_type, locale).to_string(),
                status_label(&job.status, locale).to_string(),
                job.display_duration(locale),
                format_time_ago_in(job.started_at.as_deref(), locale),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.width());
        }
    }

    // Shrink the task column to fit the terminal
    let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    if total > options.max_width {
        let excess = total - options.max_width;
        widths[1] = widths[1].saturating_sub(excess).max(MIN_TASK_WIDTH.min(widths[1]));
    }

    let mut output = String::new();
    let header_line: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, h)| pad(h, widths[idx]))
        .collect();
    let header_line = header_line.join(COLUMN_GAP);
    if options.use_color {
        output.push_str(&format!("{}{}{}\n", ANSI_BOLD, header_line.trim_end(), ANSI_RESET));
    } else {
        output.push_str(&format!("{}\n", header_line.trim_end()));
    }

    for (job, row) in jobs.iter().zip(&rows) {
        let mut cells = Vec::with_capacity(row.len());
        for (idx, cell) in row.iter().enumerate() {
            let text = truncate(cell, widths[idx]);
            let padded = pad(&text, widths[idx]);
            // Colors wrap the padded cell; label text is identical to the plain cell
            let rendered = match idx {
                2 if options.use_color => {
                    let label = exec_type_badge_ansi(&job.exec_type, locale, true);
                    padded.replacen(&text, &label, 1)
                }
                3 if options.use_color => {
                    let label = status_badge_ansi(&job.status, locale, true);
                    padded.replacen(&text, &label, 1)
                }
                _ => padded,
            };
            cells.push(rendered);
        }
        output.push_str(cells.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }

    output
}

/// Format job records as HTML table rows using the badge builders
pub fn format_jobs_html(jobs: &[JobRecord], locale: Locale) -> String {
    let mut output = String::new();
    for job in jobs {
        output.push_str(&format!(
            "<tr data-job-id=\"{id}\"><td>{id}</td><td>{task}</td><td>{exec_type}</td><td>{status}</td><td>{duration}</td><td>{started}</td></tr>\n",
            id = escape_html(&job.id),
            task = escape_html(&job.task),
            exec_type = exec_type_badge_html_in(&job.exec_type, locale),
            status = status_badge_html_in(&job.status, locale),
            duration = escape_html(&job.display_duration(locale)),
            started = escape_html(&format_time_ago_in(job.started_at.as_deref(), locale)),
        ));
    }
    output
}
