//! Core business logic - framework-agnostic schedule, evaluation and admin operations.

/// Seven-day (or longer) view of the effective schedule
pub mod agenda;
/// Singleton business configuration: lazy creation and admin updates
pub mod business_config;
/// Time parsing and formatting helpers
pub mod clock;
/// Date override persistence
pub mod date_override;
/// Subscription gate composed with the hours evaluator
pub mod gate;
/// The business-hours evaluator
pub mod hours;
/// Domain types for the schedule
pub mod schedule;
/// Read interface used by the evaluator
pub mod store;
/// Subscription expiry gate
pub mod subscription;
