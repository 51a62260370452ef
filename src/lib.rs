//! ezview - presentation helpers for the EZ task runner dashboard
//!
//! This library provides:
//! - Execution status and type label tables (zh-CN and English)
//! - HTML escaping and badge markup builders
//! - Duration, elapsed-time and relative-time formatting
//! - A headless toast notification presenter
//! - Job record loading and table rendering for the `ezview` CLI
//!
//! # Example
//!
//! ```
//! use ezview::utils::format_duration_ms;
//! use ezview::view::status_badge_html;
//!
//! assert_eq!(format_duration_ms(125_000), "2分5秒");
//! assert_eq!(
//!     status_badge_html("running"),
//!     "<span class=\"status-badge running\">运行中</span>"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod utils;
pub mod view;
