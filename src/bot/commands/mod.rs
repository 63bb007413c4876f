//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Schedule management commands (admin)
pub mod schedule;

/// Customer-facing status and agenda commands
pub mod storefront;

/// Subscription management commands (admin)
pub mod subscription;

// Export commands
pub use general::*;
pub use schedule::*;
pub use storefront::*;
pub use subscription::*;
