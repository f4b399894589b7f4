//! In-memory reminder outbox.

use std::sync::{Arc, RwLock};

use tracing::debug;
use uuid::Uuid;

use theraplan_core::{
    application::ports::ReminderSink,
    domain::{Reminder, ReminderStatus},
    error::TheraplanResult,
};

use super::poisoned;

/// Thread-safe reminder outbox.
///
/// Cancelled reminders stay in the outbox as history; only pending ones
/// are reported by `pending_for_module`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderSink {
    inner: Arc<RwLock<Vec<Reminder>>>,
}

impl InMemoryReminderSink {
    /// Create a new empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every reminder ever stored, whatever its status (testing helper).
    pub fn all(&self) -> Vec<Reminder> {
        self.inner.read().map(|r| r.clone()).unwrap_or_default()
    }

    /// Mark a pending reminder as sent. Returns `false` when no pending
    /// reminder has that id.
    pub fn mark_sent(&self, id: Uuid) -> TheraplanResult<bool> {
        let mut inner = self.inner.write().map_err(|_| poisoned("reminder outbox"))?;
        Ok(inner
            .iter_mut()
            .find(|r| r.id == id)
            .is_some_and(|r| r.transition(ReminderStatus::Sent)))
    }
}

fn cancel_pending(reminders: &mut [Reminder], module: &str, module_id: &str) -> usize {
    let mut cancelled = 0;
    for reminder in reminders
        .iter_mut()
        .filter(|r| r.module == module && r.module_id == module_id)
    {
        if reminder.transition(ReminderStatus::Cancelled) {
            cancelled += 1;
        }
    }
    cancelled
}

impl ReminderSink for InMemoryReminderSink {
    fn delete_all_for_module(&self, module: &str, module_id: &str) -> TheraplanResult<usize> {
        let mut inner = self.inner.write().map_err(|_| poisoned("reminder outbox"))?;
        Ok(cancel_pending(&mut inner, module, module_id))
    }

    fn save(&self, reminder: Reminder) -> TheraplanResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("reminder outbox"))?;
        inner.push(reminder);
        Ok(())
    }

    fn pending_for_module(&self, module: &str, module_id: &str) -> TheraplanResult<Vec<Reminder>> {
        let inner = self.inner.read().map_err(|_| poisoned("reminder outbox"))?;
        let mut pending: Vec<Reminder> = inner
            .iter()
            .filter(|r| r.is_pending() && r.module == module && r.module_id == module_id)
            .cloned()
            .collect();
        pending.sort_by_key(|r| r.scheduled_at);
        Ok(pending)
    }

    fn replace_for_module(
        &self,
        module: &str,
        module_id: &str,
        reminders: Vec<Reminder>,
    ) -> TheraplanResult<usize> {
        // One write guard covers purge and insert.
        let mut inner = self.inner.write().map_err(|_| poisoned("reminder outbox"))?;
        let cancelled = cancel_pending(&mut inner, module, module_id);
        debug!(module, module_id, cancelled, added = reminders.len(), "Replacing reminders");
        inner.extend(reminders);
        Ok(cancelled)
    }
}
