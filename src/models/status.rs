use crate::models::Locale;

/// Execution status of a job, plan or CLI run
///
/// Only the known keys have labels. Callers holding a raw key should go through
/// [`status_label`], which falls back to the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    Success,
    Failed,
    Error,
    Running,
    Pending,
    Cancelled,
    Timeout,
    Skipped,
}

impl ExecStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecStatus::Success => "success",
            ExecStatus::Failed => "failed",
            ExecStatus::Error => "error",
            ExecStatus::Running => "running",
            ExecStatus::Pending => "pending",
            ExecStatus::Cancelled => "cancelled",
            ExecStatus::Timeout => "timeout",
            ExecStatus::Skipped => "skipped",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(ExecStatus::Success),
            "failed" => Some(ExecStatus::Failed),
            "error" => Some(ExecStatus::Error),
            "running" => Some(ExecStatus::Running),
            "pending" => Some(ExecStatus::Pending),
            "cancelled" => Some(ExecStatus::Cancelled),
            "timeout" => Some(ExecStatus::Timeout),
            "skipped" => Some(ExecStatus::Skipped),
            _ => None,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::ZhCn => match self {
                ExecStatus::Success => "成功",
                ExecStatus::Failed => "失败",
                ExecStatus::Error => "错误",
                ExecStatus::Running => "运行中",
                ExecStatus::Pending => "等待中",
                ExecStatus::Cancelled => "已取消",
                ExecStatus::Timeout => "超时",
                ExecStatus::Skipped => "已跳过",
            },
            Locale::En => match self {
                ExecStatus::Success => "Success",
                ExecStatus::Failed => "Failed",
                ExecStatus::Error => "Error",
                ExecStatus::Running => "Running",
                ExecStatus::Pending => "Pending",
                ExecStatus::Cancelled => "Cancelled",
                ExecStatus::Timeout => "Timeout",
                ExecStatus::Skipped => "Skipped",
            },
        }
    }
}

/// Kind of execution that produced a job record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecType {
    Plan,
    Task,
    Cli,
}

impl ExecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecType::Plan => "plan",
            ExecType::Task => "task",
            ExecType::Cli => "cli",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plan" => Some(ExecType::Plan),
            "task" => Some(ExecType::Task),
            "cli" => Some(ExecType::Cli),
            _ => None,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ExecType::Plan, Locale::ZhCn) => "计划",
            (ExecType::Task, Locale::ZhCn) => "任务",
            (ExecType::Plan, Locale::En) => "Plan",
            (ExecType::Task, Locale::En) => "Task",
            (ExecType::Cli, _) => "CLI",
        }
    }
}

/// Display label for a raw status key, or the key itself when unknown
pub fn status_label(key: &str, locale: Locale) -> &str {
    ExecStatus::from_str(key)
        .map(|s| s.label(locale))
        .unwrap_or(key)
}

/// Display label for a raw execution type key, or the key itself when unknown
pub fn exec_type_label(key: &str, locale: Locale) -> &str {
    ExecType::from_str(key)
        .map(|t| t.label(locale))
        .unwrap_or(key)
}

/// Style class for an execution type badge: plan and cli get their own class,
/// everything else (unknown keys included) renders as a task.
pub fn exec_type_class(key: &str) -> &'static str {
    match ExecType::from_str(key) {
        Some(ExecType::Plan) => "badge-plan",
        Some(ExecType::Cli) => "badge-cli",
        _ => "badge-task",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_status_conversion() {
        let all = [
            ExecStatus::Success,
            ExecStatus::Failed,
            ExecStatus::Error,
            ExecStatus::Running,
            ExecStatus::Pending,
            ExecStatus::Cancelled,
            ExecStatus::Timeout,
            ExecStatus::Skipped,
        ];
        for status in all {
            assert_eq!(ExecStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ExecStatus::from_str("SUCCESS"), None);
        assert_eq!(ExecStatus::from_str("invalid"), None);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label("success", Locale::ZhCn), "成功");
        assert_eq!(status_label("running", Locale::ZhCn), "运行中");
        assert_eq!(status_label("skipped", Locale::ZhCn), "已跳过");
        assert_eq!(status_label("timeout", Locale::En), "Timeout");
    }

    #[test]
    fn test_status_label_falls_back_to_key() {
        assert_eq!(status_label("queued", Locale::ZhCn), "queued");
        assert_eq!(status_label("", Locale::En), "");
    }

    #[test]
    fn test_exec_type_labels_and_classes() {
        assert_eq!(exec_type_label("plan", Locale::ZhCn), "计划");
        assert_eq!(exec_type_label("task", Locale::ZhCn), "任务");
        assert_eq!(exec_type_label("cli", Locale::ZhCn), "CLI");
        assert_eq!(exec_type_label("cron", Locale::ZhCn), "cron");

        assert_eq!(exec_type_class("plan"), "badge-plan");
        assert_eq!(exec_type_class("cli"), "badge-cli");
        assert_eq!(exec_type_class("task"), "badge-task");
        assert_eq!(exec_type_class("cron"), "badge-task");
    }
}
