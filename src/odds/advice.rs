//! Turning odds into a recommendation.

use serde::{Deserialize, Serialize};

use super::Odds;
use crate::core::AdviceThresholds;

/// Recommendation shown next to the odds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    FavorDrawing,
    FavorStanding,
    Marginal,
}

impl Advice {
    /// Classify odds against the given bands.
    ///
    /// The safe band is checked first, so a position that is both likely safe
    /// and likely bust is never reported as "favor standing".
    #[must_use]
    pub fn classify(odds: &Odds, thresholds: &AdviceThresholds) -> Self {
        if odds.player_safe > thresholds.favor_drawing_above {
            Advice::FavorDrawing
        } else if odds.player_bust > thresholds.favor_standing_above {
            Advice::FavorStanding
        } else {
            Advice::Marginal
        }
    }

    /// Fixed advisory text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Advice::FavorDrawing => "Good odds of landing on 17-21: drawing is favored.",
            Advice::FavorStanding => "High risk of going over 21: standing is favored.",
            Advice::Marginal => "Marginal position: no strong advice.",
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
