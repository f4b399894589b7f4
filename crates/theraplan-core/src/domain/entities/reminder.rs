use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery state of a reminder.
///
/// ```text
/// Pending ──send──▶ Sent
///    │
///    └──purge──▶ Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Sent,
    Cancelled,
}

impl ReminderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Sent) | (Self::Pending, Self::Cancelled)
        )
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled SMS reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub scheduled_at: NaiveDateTime,
    pub recipient: String,
    pub body: String,
    /// Owning module, e.g. `therapy`.
    pub module: String,
    /// Key inside the owning module; the patient id for therapy reminders.
    pub module_id: String,
    /// User who triggered the scheduling.
    pub author: String,
    pub status: ReminderStatus,
}

impl Reminder {
    pub fn pending(
        scheduled_at: NaiveDateTime,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            scheduled_at,
            recipient: recipient.into(),
            body: body.into(),
            module: String::new(),
            module_id: String::new(),
            author: String::new(),
            status: ReminderStatus::Pending,
        }
    }

    pub fn for_module(mut self, module: impl Into<String>, module_id: impl Into<String>) -> Self {
        self.module = module.into();
        self.module_id = module_id.into();
        self
    }

    pub fn authored_by(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReminderStatus::Pending
    }

    /// Move to `next` if the state machine allows it.
    pub fn transition(&mut self, next: ReminderStatus) -> bool {
        if self.status.can_transition_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reminder() -> Reminder {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Reminder::pending(at, "+1555", "REMINDER").for_module("therapy", "7")
    }

    #[test]
    fn pending_can_be_sent_or_cancelled() {
        let mut r = reminder();
        assert!(r.transition(ReminderStatus::Sent));
        assert_eq!(r.status, ReminderStatus::Sent);

        let mut r = reminder();
        assert!(r.transition(ReminderStatus::Cancelled));
        assert!(!r.is_pending());
    }

    #[test]
    fn terminal_states_do_not_move() {
        let mut r = reminder();
        r.transition(ReminderStatus::Sent);
        assert!(!r.transition(ReminderStatus::Cancelled));
        assert!(!r.transition(ReminderStatus::Pending));
        assert_eq!(r.status, ReminderStatus::Sent);
    }
}
