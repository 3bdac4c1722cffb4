//! Seller shop records and subscription states.

use serde::{Deserialize, Serialize};

use super::{ShopId, UserId};

/// A registered seller shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub description: String,
    pub address: String,
    pub contact: String,
    /// Verification happens after subscription, so new shops start unverified.
    #[serde(default)]
    pub is_verified: bool,
    pub owner_id: UserId,
    #[serde(default)]
    pub subscription: SubscriptionStatus,
}

/// Seller subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// No plan chosen yet.
    #[default]
    None,
    /// Inside the three-month free trial window.
    Trial,
    /// Paying monthly subscriber.
    Active,
    /// Lapsed subscription; dashboard access is suspended.
    Expired,
}

impl SubscriptionStatus {
    /// Whether the seller may access the dashboard.
    #[must_use]
    pub const fn is_entitled(self) -> bool {
        matches!(self, Self::Trial | Self::Active)
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Trial => write!(f, "trial"),
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Plans offered at seller onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    /// Three months free, then monthly billing.
    Trial,
    /// Skip the trial and pay monthly immediately.
    Monthly,
}

impl SubscriptionPlan {
    /// Status a new subscription enters when this plan is chosen.
    #[must_use]
    pub const fn initial_status(self) -> SubscriptionStatus {
        match self {
            Self::Trial => SubscriptionStatus::Trial,
            Self::Monthly => SubscriptionStatus::Active,
        }
    }
}
