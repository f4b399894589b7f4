//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "expand a patient's therapies" or
//! "reschedule reminders".

pub mod reminder_service;
pub mod shortage_service;
pub mod stock_service;
pub mod therapy_service;

pub use reminder_service::ReminderService;
pub use shortage_service::ShortageService;
pub use stock_service::{StockLevel, StockService};
pub use therapy_service::TherapyService;
