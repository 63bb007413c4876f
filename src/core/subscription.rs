//! Subscription gate - whether the business's plan is paid up.
//!
//! Kept apart from the hours evaluator: billing status and opening hours are
//! independent questions, combined only by the caller (see [`crate::core::gate`]).

use crate::core::schedule::BusinessConfig;
use chrono::NaiveDate;
use serde::Serialize;

/// Message shown to customers while the subscription is lapsed
pub const SUSPENDED_MESSAGE: &str =
    "Online ordering is temporarily unavailable. Please contact the restaurant.";

/// Subscription state on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubscriptionStatus {
    /// Paid up; the expiry day itself still counts as active
    Active {
        /// Last paid-up day
        expires_on: NaiveDate,
        /// Days remaining after today
        days_left: i64,
    },
    /// Lapsed
    Expired {
        /// Last paid-up day
        expired_on: NaiveDate,
    },
}

impl SubscriptionStatus {
    /// `true` for [`SubscriptionStatus::Active`]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Checks the subscription against `today`.
#[must_use]
pub fn check_subscription(config: &BusinessConfig, today: NaiveDate) -> SubscriptionStatus {
    let expires_on = config.subscription_expires_on;
    if today <= expires_on {
        SubscriptionStatus::Active {
            expires_on,
            days_left: (expires_on - today).num_days(),
        }
    } else {
        SubscriptionStatus::Expired {
            expired_on: expires_on,
        }
    }
}
