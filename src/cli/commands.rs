use crate::cli::error::{user_error, validate_locale, validate_non_empty, validate_timestamp};
use crate::cli::output::{format_jobs_html, format_jobs_table, get_terminal_width, is_tty, JobTableOptions};
use crate::config::{ColorMode, Config};
use crate::models::{load_jobs, Locale};
use crate::utils::{
    escape_html, format_duration_in, format_duration_ms_in, format_duration_sec_in,
    format_time_ago_at, parse_duration_ms,
};
use crate::view::{
    exec_type_badge_ansi, exec_type_badge_html_in, status_badge_ansi, status_badge_html_in,
    ToastEvent, ToastPresenter,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ezview")]
#[command(about = "Presentation helpers for the EZ task runner - badges, toasts and duration formatting")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Display language (zh-CN, en); overrides the rc file
    #[arg(long, global = true)]
    pub locale: Option<String>,
    /// Terminal colors (auto, always, never); overrides the rc file
    #[arg(long, global = true)]
    pub color: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Escape text for embedding in HTML
    Escape {
        /// Text to escape
        text: String,
    },
    /// Render a status or execution-type badge
    Badge {
        #[command(subcommand)]
        subcommand: BadgeCommands,
    },
    /// Format a duration
    Duration {
        #[command(subcommand)]
        subcommand: DurationCommands,
    },
    /// Format how long ago a timestamp was
    Ago {
        /// Timestamp (RFC 3339, local "YYYY-MM-DD HH:MM:SS", or epoch milliseconds)
        timestamp: Option<String>,
        /// Reference time instead of the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Render a toast notification
    Toast {
        /// Message text
        message: String,
        /// Severity tag used as the style selector (default from rc, else info)
        #[arg(long = "type", short = 't')]
        severity: Option<String>,
        /// Visible duration (e.g. 3000, 3s, 1m)
        #[arg(long, short = 'd')]
        duration: Option<String>,
        /// Print the markup at each lifecycle stage (show, fade, remove)
        #[arg(long)]
        timeline: bool,
    },
    /// Render job records from a JSON file or stdin
    Jobs {
        /// JSON file with job records ("-" or omitted reads stdin)
        path: Option<String>,
        /// Output HTML table rows
        #[arg(long, conflicts_with = "json")]
        html: bool,
        /// Output normalized JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum BadgeCommands {
    /// Execution status badge (success, failed, running, ...)
    Status {
        key: String,
        /// Terminal text instead of HTML
        #[arg(long)]
        ansi: bool,
    },
    /// Execution type badge (plan, task, cli)
    Type {
        key: String,
        /// Terminal text instead of HTML
        #[arg(long)]
        ansi: bool,
    },
}

#[derive(Subcommand)]
pub enum DurationCommands {
    /// Milliseconds
    Ms {
        #[arg(allow_negative_numbers = true)]
        ms: i64,
    },
    /// Seconds (omit for a missing value)
    Sec {
        #[arg(allow_negative_numbers = true)]
        seconds: Option<f64>,
    },
    /// Elapsed time between two timestamps
    Between {
        started: Option<String>,
        finished: Option<String>,
    },
}

/// Effective settings after applying command-line overrides to the rc file
struct Settings {
    config: Config,
    use_color: bool,
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(locale) = cli.locale.as_deref() {
        config.locale = match validate_locale(locale) {
            Ok(locale) => locale,
            Err(e) => user_error(&e),
        };
    }
    if let Some(color) = cli.color.as_deref() {
        config.color = match ColorMode::from_str(color) {
            Some(mode) => mode,
            None => user_error(&format!("Invalid color mode '{}'. Use auto, always or never.", color)),
        };
    }

    let use_color = config.color.use_color(is_tty());
    // No-op outside Windows consoles
    if use_color && enable_ansi_support::enable_ansi_support().is_err() {
        log::warn!("ANSI colors are not supported by this terminal");
    }
    log::debug!("Locale {}, color {}", config.locale, use_color);

    Ok(Settings { config, use_color })
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    let locale = settings.config.locale;

    match cli.command {
        Commands::Escape { text } => {
            println!("{}", escape_html(&text));
        }
        Commands::Badge { subcommand } => handle_badge(subcommand, locale, settings.use_color),
        Commands::Duration { subcommand } => handle_duration(subcommand, locale),
        Commands::Ago { timestamp, now } => {
            let now = match now.as_deref() {
                Some(expr) => match validate_timestamp(expr, "--now") {
                    Ok(now) => now,
                    Err(e) => user_error(&e),
                },
                None => chrono::Utc::now(),
            };
            println!("{}", format_time_ago_at(timestamp.as_deref(), now, locale));
        }
        Commands::Toast { message, severity, duration, timeline } => {
            handle_toast(&settings.config, &message, severity, duration, timeline)?;
        }
        Commands::Jobs { path, html, json } => {
            handle_jobs(path.as_deref(), html, json, locale, settings.use_color)?;
        }
    }

    Ok(())
}

fn handle_badge(subcommand: BadgeCommands, locale: Locale, use_color: bool) {
    let rendered = match subcommand {
        BadgeCommands::Status { key, ansi: true } => status_badge_ansi(&key, locale, use_color),
        BadgeCommands::Status { key, ansi: false } => status_badge_html_in(&key, locale),
        BadgeCommands::Type { key, ansi: true } => exec_type_badge_ansi(&key, locale, use_color),
        BadgeCommands::Type { key, ansi: false } => exec_type_badge_html_in(&key, locale),
    };
    println!("{}", rendered);
}

fn handle_duration(subcommand: DurationCommands, locale: Locale) {
    let rendered = match subcommand {
        DurationCommands::Ms { ms } => format_duration_ms_in(ms, locale),
        DurationCommands::Sec { seconds } => format_duration_sec_in(seconds, locale),
        DurationCommands::Between { started, finished } => {
            format_duration_in(started.as_deref(), finished.as_deref(), locale)
        }
    };
    println!("{}", rendered);
}

fn handle_toast(
    config: &Config,
    message: &str,
    severity: Option<String>,
    duration: Option<String>,
    timeline: bool,
) -> Result<()> {
    if let Err(e) = validate_non_empty(message, "Toast message") {
        user_error(&e);
    }
    let duration_ms = match duration.as_deref() {
        Some(expr) => match parse_duration_ms(expr) {
            Ok(ms) => ms,
            Err(e) => user_error(&e.to_string()),
        },
        None => config.toast_duration_ms,
    };
    let severity = severity.unwrap_or_else(|| config.toast_severity.clone());

    let start = Instant::now();
    let mut presenter = ToastPresenter::new();
    let id = presenter.show_at(start, message, Some(&severity), Some(duration_ms));

    if !timeline {
        println!("{}", presenter.render_html());
        return Ok(());
    }

    println!("+0ms show #{}", id);
    println!("{}", presenter.render_html());
    while let Some(deadline) = presenter.next_deadline() {
        let offset = deadline.duration_since(start).as_millis();
        for event in presenter.tick(deadline) {
            match event {
                ToastEvent::FadeStarted(id) => println!("+{}ms fade #{}", offset, id),
                ToastEvent::Removed(id) => println!("+{}ms remove #{}", offset, id),
            }
        }
        println!("{}", presenter.render_html());
    }
    Ok(())
}

fn handle_jobs(path: Option<&str>, html: bool, json: bool, locale: Locale, use_color: bool) -> Result<()> {
    let jobs = match path {
        None | Some("-") => load_jobs(std::io::stdin().lock()),
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => load_jobs(std::io::BufReader::new(file)),
            Err(e) => user_error(&format!("Cannot open '{}': {}", path, e)),
        },
    };
    let jobs = match jobs {
        Ok(jobs) => jobs,
        Err(e) => user_error(&format!("{:#}", e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&jobs).context("Failed to serialize job records")?);
    } else if html {
        print!("{}", format_jobs_html(&jobs, locale));
    } else {
        let options = JobTableOptions {
            locale,
            use_color,
            max_width: get_terminal_width(),
        };
        print!("{}", format_jobs_table(&jobs, &options));
    }
    Ok(())
}
