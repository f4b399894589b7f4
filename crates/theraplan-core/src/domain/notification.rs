//! Reminder timing and SMS body formatting.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{entities::TherapyPlan, error::DomainError, schedule::end_of_day};

/// Module name therapy reminders are filed under.
pub const THERAPY_MODULE: &str = "therapy";

/// Hour of day reminders go out at.
pub const DEFAULT_REMINDER_HOUR: u32 = 8;

/// Maximum SMS body length, in characters.
pub const DEFAULT_SMS_MAX_LENGTH: usize = 160;

/// When reminders are sent and how long their text may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    hour: u32,
    max_length: usize,
}

impl ReminderPolicy {
    pub fn new(hour: u32, max_length: usize) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::InvalidReminderHour { hour });
        }
        Ok(Self { hour, max_length })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Reminder instants for `plan`: each dosing date moved to the reminder
    /// hour, keeping only those strictly after the end of `today`.
    pub fn reminder_times(&self, plan: &TherapyPlan, today: NaiveDate) -> Vec<NaiveDateTime> {
        let cutoff = end_of_day(today);
        let time = NaiveTime::from_hms_opt(self.hour, 0, 0).unwrap_or(NaiveTime::MIN);

        plan.dates
            .iter()
            .map(|d| d.date().and_time(time))
            .filter(|at| *at > cutoff)
            .collect()
    }

    /// Final SMS text for `plan`, cut to the maximum length.
    pub fn body_for(&self, plan: &TherapyPlan) -> String {
        truncate_chars(&reminder_body(plan), self.max_length)
    }
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            hour: DEFAULT_REMINDER_HOUR,
            max_length: DEFAULT_SMS_MAX_LENGTH,
        }
    }
}

/// Untruncated reminder text:
/// `REMINDER: {medication} {qty} {unit} {doses}/day[. {note}]`.
pub fn reminder_body(plan: &TherapyPlan) -> String {
    let mut body = format!(
        "REMINDER: {} {} {} {}/day",
        plan.medication.description.trim(),
        format_quantity(plan.quantity),
        plan.unit.trim(),
        plan.doses_per_day
    );
    if let Some(note) = plan.note.as_deref() {
        body.push_str(". ");
        body.push_str(note);
    }
    body
}

/// Hard cut after `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte character is
/// never split. Word boundaries are not respected.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text.to_owned(),
    }
}

/// Render a dose quantity, dropping the fraction when it is zero.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Medication, TherapyRecord},
        schedule::start_of_day,
        value_objects::{MedicationId, PatientId, TherapyId},
    };

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn plan(note: Option<&str>) -> TherapyPlan {
        let record = TherapyRecord {
            id: TherapyId::new(1),
            patient: PatientId::new(1),
            start: date(1, 1).and_hms_opt(21, 30, 0).unwrap(),
            end: start_of_day(date(1, 10)),
            medication: MedicationId::new(5),
            quantity: 2.0,
            unit: "tab".into(),
            doses_per_day: 3,
            frequency_days: 3,
            note: note.map(str::to_owned),
            notify: true,
            sms: true,
        };
        let med = Medication::new(MedicationId::new(5), "Paracetamol");
        TherapyPlan::expand(&record, &med).unwrap()
    }

    #[test]
    fn body_with_and_without_note() {
        assert_eq!(reminder_body(&plan(None)), "REMINDER: Paracetamol 2 tab 3/day");
        assert_eq!(
            reminder_body(&plan(Some("after meals"))),
            "REMINDER: Paracetamol 2 tab 3/day. after meals"
        );
    }

    #[test]
    fn long_body_is_hard_cut() {
        let policy = ReminderPolicy::new(8, 20).unwrap();
        let body = policy.body_for(&plan(Some("take with plenty of water")));
        assert_eq!(body, "REMINDER: Paracetamo");
        assert_eq!(body.chars().count(), 20);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 160), "short");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn quantities_render_compactly() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.5), "0.5");
    }

    #[test]
    fn reminder_times_move_to_hour_and_skip_today() {
        // dates (21:30): 01-01, 01-04, 01-07, 01-10 -> 08:00; today = 01-04
        let times = ReminderPolicy::default().reminder_times(&plan(None), date(1, 4));
        assert_eq!(
            times,
            vec![
                date(1, 7).and_hms_opt(8, 0, 0).unwrap(),
                date(1, 10).and_hms_opt(8, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        assert_eq!(
            ReminderPolicy::new(24, 160),
            Err(DomainError::InvalidReminderHour { hour: 24 })
        );
    }
}
