//! Core types and schedule engine for the kerbside waste collection calendar.

/// Merged calendar views over multiple schedules.
pub mod calendar;
/// Domain models and identifiers shared by all providers.
pub mod model;
/// Registry and helpers for plugging region-specific directories into the service.
pub mod plugin;
/// Traits describing the directory interfaces.
pub mod ports;
/// Next-occurrence and enumeration rules for recurring schedules.
pub mod recurrence;
/// Completeness validation and the night-before collection reminder.
pub mod reminder;
/// High-level service facade used by clients.
pub mod service;

pub use calendar::*;
pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use recurrence::*;
pub use reminder::*;
pub use service::*;
