use crate::models::Locale;
use crate::utils::{format_duration_in, format_duration_sec_in};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

fn default_exec_type() -> String {
    "task".to_string()
}

fn default_status() -> String {
    "pending".to_string()
}

/// Execution record as served by the EZ server's jobs API
///
/// Status and type are kept as raw strings so unknown values survive a round
/// trip and still render through the label fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    #[serde(default)]
    pub task: String,
    #[serde(rename = "type", default = "default_exec_type")]
    pub exec_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
}

impl JobRecord {
    /// Display duration: the recorded seconds when present, else the span between start and finish
    pub fn display_duration(&self, locale: Locale) -> String {
        if self.duration_sec.is_some() {
            format_duration_sec_in(self.duration_sec, locale)
        } else {
            format_duration_in(self.started_at.as_deref(), self.finished_at.as_deref(), locale)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JobsPayload {
    List(Vec<JobRecord>),
    Wrapped { jobs: Vec<JobRecord> },
}

/// Load job records from a JSON array or a `{"jobs": [...]}` response body
pub fn load_jobs<R: Read>(reader: R) -> Result<Vec<JobRecord>> {
    let payload: JobsPayload = serde_json::from_reader(reader)
        .context("Failed to parse job records (expected a JSON array or {\"jobs\": [...]})")?;
    let jobs = match payload {
        JobsPayload::List(jobs) => jobs,
        JobsPayload::Wrapped { jobs } => jobs,
    };
    log::debug!("Loaded {} job records", jobs.len());
    Ok(jobs)
}
