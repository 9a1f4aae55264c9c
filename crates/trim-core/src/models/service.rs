//! Service model definition and related functionality.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A service from the shop's catalog (e.g. haircut, beard trim).
///
/// Immutable reference data for a booking session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Unique identifier for the service
    pub id: u64,

    /// Title of the service
    pub title: String,

    /// Base price before any promotion
    pub price: Decimal,

    /// How long one sitting of the service takes
    pub duration_minutes: u32,

    /// Which occurrences the promotion applies to
    #[serde(default)]
    pub promotion: PromotionScope,

    /// Discount percentage (0..=100); only meaningful when `promotion` is
    /// not [`PromotionScope::None`]
    pub discount_percentage: Option<u8>,
}

impl Service {
    /// The discount percentage in effect, treating a missing value as zero.
    pub fn discount(&self) -> u8 {
        self.discount_percentage.unwrap_or(0)
    }
}

/// Type-safe enumeration of promotion scopes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromotionScope {
    /// No promotion; every occurrence is charged the base price
    #[default]
    None,

    /// Every occurrence of the service is discounted
    All,

    /// Only the first-selected occurrence in a session is discounted
    Vip,
}

impl FromStr for PromotionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(PromotionScope::None),
            "all" => Ok(PromotionScope::All),
            "vip" => Ok(PromotionScope::Vip),
            _ => Err(format!("Invalid promotion scope: {s}")),
        }
    }
}

impl PromotionScope {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionScope::None => "none",
            PromotionScope::All => "all",
            PromotionScope::Vip => "vip",
        }
    }
}
