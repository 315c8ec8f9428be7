//! Loyalty rewards: tiers, redemption checks, and points history.
//!
//! All functions here are pure computations over explicit inputs; the
//! presentation layer owns the member's point balance and decides how to
//! render tier badges and redemption buttons.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A membership tier in the loyalty program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyTier {
    /// Tier name (e.g. "Gold").
    pub name: String,
    /// Minimum points required to hold this tier.
    pub min_points: u32,
    /// Benefit descriptions for the presentation layer.
    pub benefits: Vec<String>,
}

/// A reward that can be redeemed for points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardItem {
    /// Unique reward identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Points required to redeem.
    pub points: u32,
    /// Description for the presentation layer.
    pub description: String,
    /// Whether the reward is currently offered at all.
    pub available: bool,
}

impl RewardItem {
    /// Check whether a member with the given balance can redeem this
    /// reward right now.
    pub fn redeemable_with(&self, points: u32) -> bool {
        self.available && points >= self.points
    }
}

/// One entry in a member's points history. Positive deltas are earned
/// points, negative deltas are redemptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsEntry {
    /// Date the points were earned or spent.
    pub date: NaiveDate,
    /// Human-readable action (e.g. "Purchase - Pro Smartphone").
    pub action: String,
    /// Signed point delta.
    pub points: i64,
}

/// Progress toward the next tier, as a percentage clamped to 100.
///
/// A zero threshold means the tier is already reached.
pub fn progress_percent(current_points: u32, next_tier_points: u32) -> f64 {
    if next_tier_points == 0 {
        return 100.0;
    }
    (f64::from(current_points) / f64::from(next_tier_points) * 100.0).min(100.0)
}

/// The tier a member currently holds: the highest tier whose threshold
/// the balance meets. `None` only when `tiers` is empty or every
/// threshold is above the balance.
pub fn current_tier(tiers: &[LoyaltyTier], points: u32) -> Option<&LoyaltyTier> {
    tiers
        .iter()
        .filter(|tier| tier.min_points <= points)
        .max_by_key(|tier| tier.min_points)
}

/// The next tier a member can reach: the lowest tier whose threshold is
/// above the balance. `None` when the member already holds the top tier.
pub fn next_tier(tiers: &[LoyaltyTier], points: u32) -> Option<&LoyaltyTier> {
    tiers
        .iter()
        .filter(|tier| tier.min_points > points)
        .min_by_key(|tier| tier.min_points)
}

/// Net point balance over a history of entries.
pub fn points_balance(history: &[PointsEntry]) -> i64 {
    history.iter().map(|entry| entry.points).sum()
}
