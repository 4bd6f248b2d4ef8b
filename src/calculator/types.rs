use crate::division::Division;
use serde::{Deserialize, Serialize};

/// Output record of one competitive evaluation. Field names on the wire
/// match the keys downstream consumers already read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Overall performance after the device boost.
    #[serde(rename = "OP")]
    pub op: f64,
    /// Target protection.
    #[serde(rename = "TP")]
    pub tp: f64,
    /// Survival points.
    #[serde(rename = "SP")]
    pub sp: f64,
    /// Game objective score.
    #[serde(rename = "GO")]
    pub go: f64,
    /// Average damage per counted round.
    #[serde(rename = "AD")]
    pub ad: f64,
    /// Experience per adjusted round.
    #[serde(rename = "XPR")]
    pub xpr: f64,
    #[serde(rename = "Division")]
    pub division: Division,
    #[serde(rename = "SDI")]
    pub sdi: f64,
    /// Penalised rounds-played count, present only when the player fell
    /// below the objective ratio.
    #[serde(rename = "AutoPenalty")]
    pub auto_penalty: Option<i64>,
}

impl MetricsResult {
    /// Extra rounds the auto penalty charges on top of `rounds_played`.
    pub fn penalty_rounds(&self, rounds_played: u32) -> Option<i64> {
        self.auto_penalty
            .map(|penalised| penalised - i64::from(rounds_played))
    }
}

/// Intermediates of the pipeline, kept for debug reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    // Round accounting
    pub rounds_played: i64,
    pub rounds_adjusted: i64,
    pub rounds_gamified: i64,
    pub round_divisor: f64,

    // Skill scaling
    pub s_ma: f64,
    pub s_mb: f64,

    // Score before boost
    pub radicand: f64,
    pub raw_op: f64,
    pub device_multiplier: f64,

    // Guards that fired under the clamp policy
    pub divisor_clamped: bool,
    pub radicand_clamped: bool,
}
