//! Casual and lifetime OP. Works from raw level/experience readings instead
//! of a precomputed delta and has no SDI, device boost or auto penalty.

use crate::config::{CalcConfig, GuardPolicy};
use crate::consts::{CASUAL_FIELD_COUNT, CASUAL_OP_SCALE, CASUAL_ROUNDS, LIFETIME_ROUNDS};
use crate::division::{Division, Ladder};
use crate::error::{OpError, OpResult};
use crate::stats::parse_token;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::Display;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualStats {
    pub lva: u32,
    pub xpa: u32,
    pub lvb: u32,
    pub xpb: u32,
    pub rounds_played: u32,
    pub targets_assassinated: u32,
    pub escapes: u32,
    pub guards_killed: u32,
    pub targets_protected: u32,
    pub damage_dealt: u32,
    pub final_shots: u32,
    pub target_survivals: u32,
    pub ffa_kills: u32,
    pub ffa_wins: u32,
    pub infected_killed: u32,
    pub infection_survival: u32,
    pub infections: u32,
    pub epidemics: u32,
}

impl FromStr for CasualStats {
    type Err = OpError;

    /// Parses the 18-value casual copypasta, in field declaration order.
    fn from_str(s: &str) -> OpResult<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CASUAL_FIELD_COUNT {
            return Err(OpError::Parse(format!(
                "expected {} values, got {}",
                CASUAL_FIELD_COUNT,
                tokens.len()
            )));
        }

        Ok(Self {
            lva: parse_token(tokens[0], "lva")?,
            xpa: parse_token(tokens[1], "xpa")?,
            lvb: parse_token(tokens[2], "lvb")?,
            xpb: parse_token(tokens[3], "xpb")?,
            rounds_played: parse_token(tokens[4], "rounds_played")?,
            targets_assassinated: parse_token(tokens[5], "targets_assassinated")?,
            escapes: parse_token(tokens[6], "escapes")?,
            guards_killed: parse_token(tokens[7], "guards_killed")?,
            targets_protected: parse_token(tokens[8], "targets_protected")?,
            damage_dealt: parse_token(tokens[9], "damage_dealt")?,
            final_shots: parse_token(tokens[10], "final_shots")?,
            target_survivals: parse_token(tokens[11], "target_survivals")?,
            ffa_kills: parse_token(tokens[12], "ffa_kills")?,
            ffa_wins: parse_token(tokens[13], "ffa_wins")?,
            infected_killed: parse_token(tokens[14], "infected_killed")?,
            infection_survival: parse_token(tokens[15], "infection_survival")?,
            infections: parse_token(tokens[16], "infections")?,
            epidemics: parse_token(tokens[17], "epidemics")?,
        })
    }
}

/// How much history a casual sheet covers, judged by rounds played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsScope {
    #[strum(to_string = "lifetime stats")]
    Lifetime,
    #[strum(to_string = "casual stats")]
    Casual,
    #[strum(to_string = "competitive stats")]
    Competitive,
}

impl StatsScope {
    pub fn from_rounds(rounds_played: u32) -> Self {
        if rounds_played >= LIFETIME_ROUNDS {
            Self::Lifetime
        } else if rounds_played >= CASUAL_ROUNDS {
            Self::Casual
        } else {
            Self::Competitive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CasualResult {
    pub op: f64,
    pub experience_difference: i64,
    pub adjusted_rounds: i64,
    pub experience_per_round: f64,
    pub average_damage: f64,
    pub guard_objective: f64,
    pub z_factor: f64,
    pub assassin_aggression: f64,
    pub performance_score: f64,
    pub division: Division,
    pub scope: StatsScope,
}

/// Experience needed to go from level 1 to `level`, plus the progress `xp`
/// into that level. Levels whose total no longer fits an `i64` are rejected.
pub fn total_experience(level: u32, xp: u32) -> OpResult<i64> {
    let too_high = || OpError::Validation(format!("level {} is too high to total", level));

    (1..=level).try_fold(i64::from(xp), |total, n| {
        let n = f64::from(n);
        let step = ((n - 1.0) * (2.46 * 1.02f64.powf(n)) * 10.0).floor();
        if step >= i64::MAX as f64 {
            return Err(too_high());
        }
        (step as i64)
            .checked_mul(10)
            .and_then(|banked| total.checked_add(banked))
            .ok_or_else(too_high)
    })
}

#[derive(Debug, Clone, Default)]
pub struct CasualCalculator {
    pub config: CalcConfig,
}

impl CasualCalculator {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    pub fn calculate(&self, stats: &CasualStats) -> OpResult<CasualResult> {
        let strict = self.config.guard_policy == GuardPolicy::Strict;
        let at_least_one = |rounds: i64| rounds.max(1) as f64;

        let experience_difference =
            total_experience(stats.lvb, stats.xpb)? - total_experience(stats.lva, stats.xpa)?;

        let escapes = i64::from(stats.escapes);
        let target_survivals = i64::from(stats.target_survivals);
        let epidemics = i64::from(stats.epidemics);

        let adjusted_rounds = i64::from(stats.rounds_played) - escapes;
        let rounds_with_goals = adjusted_rounds
            - escapes
            - target_survivals
            - i64::from(stats.infection_survival)
            - i64::from(stats.ffa_wins)
            - epidemics;

        if strict && adjusted_rounds == 0 {
            return Err(OpError::DivisionByZero {
                operation: "casual survival factor",
            });
        }
        let divisor = if adjusted_rounds == 0 {
            warn!("Adjusted rounds is 0; clamping the casual divisor to 1");
            1.0
        } else {
            adjusted_rounds as f64
        };

        let experience_per_round = experience_difference as f64 / at_least_one(adjusted_rounds);
        let average_damage = f64::from(stats.damage_dealt)
            / at_least_one(adjusted_rounds - (escapes + target_survivals + epidemics));
        let assassin_aggression = 100.0
            * ((2.0 * f64::from(stats.escapes) + f64::from(stats.guards_killed))
                / at_least_one(adjusted_rounds));
        let guard_objective = 45.0
            * ((5.0 * f64::from(stats.final_shots) + 3.0 * f64::from(stats.targets_protected))
                / at_least_one(rounds_with_goals));

        let z_factor = (12.0 / divisor)
            * (9.0 * f64::from(stats.ffa_kills)
                + 14.0 * f64::from(stats.infected_killed)
                + 40.0 * f64::from(stats.ffa_wins)
                + 16.0 * f64::from(stats.infection_survival)
                + 25.0 * f64::from(stats.infections)
                + 100.0 * f64::from(stats.epidemics));

        let performance_score = (adjusted_rounds as f64
            * (154.0 * (guard_objective + assassin_aggression) + 47.0 * average_damage)
            + 52.0 * experience_difference as f64)
            / (165.0 * divisor);

        let mut radicand = performance_score + z_factor;
        if radicand < 0.0 {
            if strict {
                return Err(OpError::NegativeRadicand { value: radicand });
            }
            warn!("Casual score total is negative ({:.3}); clamping OP to 0", radicand);
            radicand = 0.0;
        }
        let op = CASUAL_OP_SCALE * radicand.sqrt();

        debug!(
            experience_difference,
            adjusted_rounds,
            performance_score,
            z_factor,
            op,
            "casual pipeline evaluated"
        );

        Ok(CasualResult {
            op,
            experience_difference,
            adjusted_rounds,
            experience_per_round,
            average_damage,
            guard_objective,
            z_factor,
            assassin_aggression,
            performance_score,
            division: Ladder::Casual.division_for(op),
            scope: StatsScope::from_rounds(stats.rounds_played),
        })
    }
}
