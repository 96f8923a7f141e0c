// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Points granted for every ticket purchased.
pub const POINTS_PER_TICKET: u32 = 10;

/// Lowest balance that reaches the Silver tier.
pub const SILVER_THRESHOLD: u32 = 50;

/// Lowest balance that reaches the Gold tier.
pub const GOLD_THRESHOLD: u32 = 100;

/// Customer loyalty band, derived from the current point balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoyaltyTier {
    /// Below 50 points.
    Bronze,
    /// 50 to 99 points.
    Silver,
    /// 100 points and above.
    Gold,
}

impl LoyaltyTier {
    /// Determines the tier for a point balance. Thresholds are inclusive.
    #[must_use]
    pub const fn from_points(points: u32) -> Self {
        if points >= GOLD_THRESHOLD {
            Self::Gold
        } else if points >= SILVER_THRESHOLD {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    /// Converts this tier to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }
}

impl std::fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
