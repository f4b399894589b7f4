pub mod medication;
pub mod patient;
pub mod reminder;
pub mod therapy;

pub use medication::Medication;
pub use patient::Patient;
pub use reminder::{Reminder, ReminderStatus};
pub use therapy::{TherapyPlan, TherapyRecord};
