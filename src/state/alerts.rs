#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// How long a success alert stays up before auto-dismissal.
pub const SUCCESS_DISMISS_MS: u64 = 5000;

/// Identifier of one alert, unique and increasing within a queue.
pub type AlertId = u64;

/// Visual flavor of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    /// CSS modifier name for the alert kind.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }
}

/// A transient notification shown above the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

/// The set of currently visible alerts.
///
/// `show` replaces the visible set with the new alert, so at most one alert
/// is up at a time; the vector representation leaves room for stacking if
/// that is ever wanted. Ids come from a per-queue sequence, so a deferred
/// dismissal scheduled for an id that has since been replaced or dismissed
/// lands on [`AlertQueue::dismiss`]'s absent-id no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertQueue {
    alerts: Vec<Alert>,
    next_id: AlertId,
}

impl AlertQueue {
    /// Shows a new alert, replacing any currently visible ones. Returns the
    /// new alert's id so a deferred dismissal can target exactly this alert.
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>) -> AlertId {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts = vec![Alert {
            id,
            kind,
            message: message.into(),
        }];
        id
    }

    /// Removes the alert with this id if it is still present. Absent ids are
    /// a no-op, which makes late timers and double-dismissal harmless.
    pub fn dismiss(&mut self, id: AlertId) {
        self.alerts.retain(|alert| alert.id != id);
    }

    /// Empties the queue immediately. Pending dismissal timers become no-ops
    /// via the absent-id check in [`AlertQueue::dismiss`].
    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    /// The currently visible alerts, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn contains(&self, id: AlertId) -> bool {
        self.alerts.iter().any(|alert| alert.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
