use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Named performance tier, best first.
#[derive(
    Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Division {
    #[strum(to_string = "Kugelblitz (S)")]
    #[serde(rename = "Kugelblitz (S)")]
    Kugelblitz,
    #[strum(to_string = "Radiance (A+)")]
    #[serde(rename = "Radiance (A+)")]
    Radiance,
    #[strum(to_string = "Firestorm (A)")]
    #[serde(rename = "Firestorm (A)")]
    Firestorm,
    #[strum(to_string = "Flashover (A-)")]
    #[serde(rename = "Flashover (A-)")]
    Flashover,
    #[strum(to_string = "Magnesium (B+)")]
    #[serde(rename = "Magnesium (B+)")]
    Magnesium,
    #[strum(to_string = "Thermite (B)")]
    #[serde(rename = "Thermite (B)")]
    Thermite,
    #[strum(to_string = "Propane (C)")]
    #[serde(rename = "Propane (C)")]
    Propane,
    #[strum(to_string = "Wood (D)")]
    #[serde(rename = "Wood (D)")]
    Wood,
    #[strum(to_string = "Ember (E)")]
    #[serde(rename = "Ember (E)")]
    Ember,
}

/// Lower bound of every tier above Ember, highest first.
pub type Cutoffs = [(f64, Division); 8];

const COMPETITIVE_CUTOFFS: Cutoffs = [
    (975.0, Division::Kugelblitz),
    (935.0, Division::Radiance),
    (870.0, Division::Firestorm),
    (820.0, Division::Flashover),
    (765.0, Division::Magnesium),
    (705.0, Division::Thermite),
    (635.0, Division::Propane),
    (560.0, Division::Wood),
];

const CASUAL_CUTOFFS: Cutoffs = [
    (945.0, Division::Kugelblitz),
    (900.0, Division::Radiance),
    (840.0, Division::Firestorm),
    (785.0, Division::Flashover),
    (735.0, Division::Magnesium),
    (670.0, Division::Thermite),
    (605.0, Division::Propane),
    (535.0, Division::Wood),
];

/// Which set of cut-offs an OP value is graded against.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Ladder {
    Competitive,
    Casual,
}

impl Ladder {
    pub fn cutoffs(&self) -> &'static Cutoffs {
        match self {
            Self::Competitive => &COMPETITIVE_CUTOFFS,
            Self::Casual => &CASUAL_CUTOFFS,
        }
    }

    /// First tier whose lower bound `op` reaches. NaN lands in Ember.
    pub fn division_for(&self, op: f64) -> Division {
        self.cutoffs()
            .iter()
            .find(|(floor, _)| op >= *floor)
            .map_or(Division::Ember, |&(_, division)| division)
    }
}

/// Tier lookup on the competitive ladder.
pub fn tier_lookup(boosted_op: f64) -> Division {
    Ladder::Competitive.division_for(boosted_op)
}
