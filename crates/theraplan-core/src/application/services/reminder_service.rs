//! Reminder Service - SMS reminders derived from therapy plans.
//!
//! Scheduling always replaces: the pending reminders of a patient are
//! cancelled and the freshly derived set is stored in one sink operation,
//! so editing a therapy never leaves duplicates or orphans behind.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{PatientDirectory, ReminderSink},
        services::TherapyService,
    },
    domain::{Patient, PatientId, Reminder, ReminderPolicy, THERAPY_MODULE, TherapyPlan},
    error::TheraplanResult,
};

/// Service scheduling therapy reminders.
pub struct ReminderService {
    therapies: TherapyService,
    patients: Box<dyn PatientDirectory>,
    sink: Box<dyn ReminderSink>,
    policy: ReminderPolicy,
    module: String,
}

impl ReminderService {
    /// Create a new reminder service filing under the `therapy` module.
    pub fn new(
        therapies: TherapyService,
        patients: Box<dyn PatientDirectory>,
        sink: Box<dyn ReminderSink>,
        policy: ReminderPolicy,
    ) -> Self {
        Self {
            therapies,
            patients,
            sink,
            policy,
            module: THERAPY_MODULE.to_owned(),
        }
    }

    /// File reminders under a different module name.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Re-derive and replace every pending reminder of `patient`.
    ///
    /// `actor` is recorded as the author of each reminder. `today` bounds
    /// which dates still get a reminder: only those strictly after its end.
    /// Returns the reminders now pending.
    #[instrument(skip_all, fields(patient = %patient, actor = %actor, today = %today))]
    pub fn schedule(
        &self,
        patient: PatientId,
        actor: &str,
        today: NaiveDate,
    ) -> TheraplanResult<Vec<Reminder>> {
        let patient = self.patients.get_by_id(patient)?;
        let plans = self.therapies.plans(patient.id)?;
        self.schedule_plans(&patient, &plans, actor, today)
    }

    /// Replace the pending reminders of `patient` with those derived from
    /// `plans`.
    pub fn schedule_plans(
        &self,
        patient: &Patient,
        plans: &[TherapyPlan],
        actor: &str,
        today: NaiveDate,
    ) -> TheraplanResult<Vec<Reminder>> {
        let reminders = self.derive(patient, plans, actor, today);
        let module_id = patient.id.to_string();

        let cancelled = self
            .sink
            .replace_for_module(&self.module, &module_id, reminders.clone())?;

        info!(
            cancelled,
            scheduled = reminders.len(),
            "Reminders replaced"
        );
        Ok(reminders)
    }

    /// Cancel every pending reminder of `patient`.
    #[instrument(skip_all, fields(patient = %patient))]
    pub fn cancel(&self, patient: PatientId) -> TheraplanResult<usize> {
        self.sink
            .delete_all_for_module(&self.module, &patient.to_string())
    }

    /// Reminders currently pending for `patient`.
    pub fn pending(&self, patient: PatientId) -> TheraplanResult<Vec<Reminder>> {
        self.sink
            .pending_for_module(&self.module, &patient.to_string())
    }

    fn derive(
        &self,
        patient: &Patient,
        plans: &[TherapyPlan],
        actor: &str,
        today: NaiveDate,
    ) -> Vec<Reminder> {
        let sms_plans: Vec<&TherapyPlan> = plans.iter().filter(|p| p.sms).collect();
        if sms_plans.is_empty() {
            return Vec::new();
        }

        let Some(phone) = patient.reachable_phone() else {
            warn!(patient = %patient.id, "SMS requested but patient has no phone number");
            return Vec::new();
        };

        let module_id = patient.id.to_string();
        let module_id = module_id.as_str();
        sms_plans
            .into_iter()
            .flat_map(|plan| {
                let body = self.policy.body_for(plan);
                self.policy
                    .reminder_times(plan, today)
                    .into_iter()
                    .map(move |at| {
                        Reminder::pending(at, phone, body.clone())
                            .for_module(&self.module, module_id)
                            .authored_by(actor)
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
