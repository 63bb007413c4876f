//! Ordering gate - composes the subscription check and the hours evaluator.
//!
//! This is what a storefront or checkout handler calls. The subscription is
//! checked first; only a paid-up business gets its hours evaluated.

use crate::core::{
    hours::{self, BusinessStatus},
    store::ScheduleStore,
    subscription::{self, SUSPENDED_MESSAGE, SubscriptionStatus},
};
use crate::errors::Result;
use chrono::NaiveDateTime;
use tracing::warn;

/// Whether customers can place orders right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingGate {
    /// Orders are accepted
    Accepting,
    /// Outside business hours; `message` explains why
    Closed {
        /// Closure message for customers
        message: String,
    },
    /// The subscription has lapsed
    Suspended {
        /// Message for customers
        message: String,
        /// The subscription state that caused the suspension
        subscription: SubscriptionStatus,
    },
}

impl OrderingGate {
    /// `true` only for [`OrderingGate::Accepting`]
    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        matches!(self, Self::Accepting)
    }

    /// Customer-facing message; empty while accepting
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Accepting => "",
            Self::Closed { message } | Self::Suspended { message, .. } => message,
        }
    }
}

/// Checks the subscription, then the business hours, at `now`.
pub async fn check_ordering<S>(store: &S, now: NaiveDateTime) -> Result<OrderingGate>
where
    S: ScheduleStore + ?Sized,
{
    let config = store.get_singleton().await?;

    let subscription = subscription::check_subscription(&config, now.date());
    if !subscription.is_active() {
        warn!("Ordering suspended: {subscription:?}");
        return Ok(OrderingGate::Suspended {
            message: SUSPENDED_MESSAGE.to_string(),
            subscription,
        });
    }

    let date_override = store.get_by_date(now.date()).await?;
    let BusinessStatus { is_open, message } =
        hours::evaluate_schedule(now, &config, date_override.as_ref());

    Ok(if is_open {
        OrderingGate::Accepting
    } else {
        OrderingGate::Closed { message }
    })
}
