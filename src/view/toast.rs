// Transient toast notifications
//
// Headless model of the dashboard's toast stack: one lazily created container,
// notices appended in order, each removed by a two-stage scheduled task (fade,
// then detach). Time only moves when the owner calls `tick`.

use crate::utils::escape_html;
use std::time::{Duration, Instant};

pub const DEFAULT_SEVERITY: &str = "info";
pub const DEFAULT_DURATION_MS: u64 = 3000;
/// Length of the fade-out animation before a toast is detached
pub const FADE_OUT_MS: u64 = 300;

pub const CONTAINER_ID: &str = "toast-container";
const FADE_OUT_ANIMATION: &str = "toast-out 0.3s ease-in forwards";

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    FadingOut,
}

/// Lifecycle transition reported by [`ToastPresenter::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    FadeStarted(ToastId),
    Removed(ToastId),
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    /// Opaque style selector; any value is accepted
    pub severity: String,
    pub phase: ToastPhase,
    pub fade_at: Instant,
    pub remove_at: Instant,
}

impl Toast {
    pub fn render_html(&self) -> String {
        let style = match self.phase {
            ToastPhase::Visible => String::new(),
            ToastPhase::FadingOut => format!(" style=\"animation: {}\"", FADE_OUT_ANIMATION),
        };
        format!(
            "<div class=\"toast toast-{}\"{}>{}</div>",
            escape_html(&self.severity),
            style,
            escape_html(&self.message)
        )
    }
}

#[derive(Debug, Default)]
struct ToastContainer {
    toasts: Vec<Toast>,
}

#[derive(Debug, Default)]
pub struct ToastPresenter {
    container: Option<ToastContainer>,
    next_id: ToastId,
}

impl ToastPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast now. See [`ToastPresenter::show_at`].
    pub fn show(&mut self, message: &str, severity: Option<&str>, duration_ms: Option<u64>) -> ToastId {
        self.show_at(Instant::now(), message, severity, duration_ms)
    }

    /// Append a toast and schedule its removal.
    ///
    /// An empty severity means `info` and a zero duration means the default
    /// 3000 ms. The toast starts fading after the duration and is detached
    /// `FADE_OUT_MS` later.
    pub fn show_at(
        &mut self,
        now: Instant,
        message: &str,
        severity: Option<&str>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        let severity = severity
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEVERITY);
        let duration_ms = duration_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_DURATION_MS);

        let id = self.next_id;
        self.next_id += 1;

        let fade_at = now + Duration::from_millis(duration_ms);
        let toast = Toast {
            id,
            message: message.to_string(),
            severity: severity.to_string(),
            phase: ToastPhase::Visible,
            fade_at,
            remove_at: fade_at + Duration::from_millis(FADE_OUT_MS),
        };

        let container = self.container.get_or_insert_with(|| {
            log::debug!("Creating toast container");
            ToastContainer::default()
        });
        log::debug!("Showing toast {} ({}) for {}ms", id, severity, duration_ms);
        container.toasts.push(toast);
        id
    }

    /// Advance the scheduled fade/detach tasks up to `now`
    pub fn tick(&mut self, now: Instant) -> Vec<ToastEvent> {
        let mut events = Vec::new();
        let Some(container) = self.container.as_mut() else {
            return events;
        };

        for toast in container.toasts.iter_mut() {
            if toast.phase == ToastPhase::Visible && now >= toast.fade_at {
                toast.phase = ToastPhase::FadingOut;
                log::debug!("Toast {} fading out", toast.id);
                events.push(ToastEvent::FadeStarted(toast.id));
            }
        }

        container.toasts.retain(|toast| {
            if now >= toast.remove_at {
                log::debug!("Toast {} removed", toast.id);
                events.push(ToastEvent::Removed(toast.id));
                false
            } else {
                true
            }
        });

        events
    }

    /// Cancel a toast's scheduled removal and detach it immediately
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        let before = container.toasts.len();
        container.toasts.retain(|toast| toast.id != id);
        before != container.toasts.len()
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn toasts(&self) -> &[Toast] {
        self.container
            .as_ref()
            .map(|c| c.toasts.as_slice())
            .unwrap_or(&[])
    }

    /// Earliest pending fade or detach, if any toast is still on screen
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts()
            .iter()
            .map(|toast| match toast.phase {
                ToastPhase::Visible => toast.fade_at,
                ToastPhase::FadingOut => toast.remove_at,
            })
            .min()
    }

    /// Markup for the container and its toasts; empty before the first toast
    pub fn render_html(&self) -> String {
        let Some(container) = self.container.as_ref() else {
            return String::new();
        };
        let body: String = container.toasts.iter().map(Toast::render_html).collect();
        format!(
            "<div id=\"{}\" class=\"toast-container\">{}</div>",
            CONTAINER_ID, body
        )
    }
}
