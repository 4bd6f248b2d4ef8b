pub mod formulas;
pub mod types;

pub use self::types::{Breakdown, MetricsResult};
use crate::config::{CalcConfig, GuardPolicy, PenaltyMode};
use crate::consts::{DEFAULT_DEVICE, DEFAULT_SDI};
use crate::device::device_multiplier;
use crate::division::tier_lookup;
use crate::error::{OpError, OpResult};
use crate::stats::StatsInput;
use tracing::{debug, warn};

/// Stateless evaluator for competitive sheets. Holds only the policy knobs,
/// so one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    pub config: CalcConfig,
}

impl MetricsCalculator {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    pub fn with_policy(guard_policy: GuardPolicy) -> Self {
        Self::new(CalcConfig {
            guard_policy,
            ..CalcConfig::default()
        })
    }

    /// Evaluates one sheet.
    pub fn calculate(&self, stats: &StatsInput, sdi: f64, device: &str) -> OpResult<MetricsResult> {
        self.calculate_detailed(stats, sdi, device)
            .map(|(result, _)| result)
    }

    /// `calculate` with SDI 1 on PC.
    pub fn calculate_with_defaults(&self, stats: &StatsInput) -> OpResult<MetricsResult> {
        self.calculate(stats, DEFAULT_SDI, DEFAULT_DEVICE)
    }

    /// Evaluates one sheet and also returns the pipeline intermediates.
    pub fn calculate_detailed(
        &self,
        stats: &StatsInput,
        sdi: f64,
        device: &str,
    ) -> OpResult<(MetricsResult, Breakdown)> {
        if !sdi.is_finite() {
            return Err(OpError::Validation(format!("SDI must be finite, got {}", sdi)));
        }
        let strict = self.config.guard_policy == GuardPolicy::Strict;

        // 1. Auto penalty (computed on the sheet as entered)
        let entered_rounds = i64::from(stats.rounds_played);
        if strict && entered_rounds == 0 {
            return Err(OpError::DivisionByZero {
                operation: "auto-penalty ratio",
            });
        }
        let auto_penalty = formulas::auto_penalty(entered_rounds, stats.objectives());

        let rounds_played = match (self.config.penalty_mode, auto_penalty) {
            (PenaltyMode::Applied, Some(penalised)) => penalised,
            _ => entered_rounds,
        };

        // 2. Round accounting
        let rounds_adjusted = formulas::rounds_adjusted(rounds_played, stats);
        let rounds_gamified = formulas::rounds_gamified(rounds_adjusted, stats);

        if strict && rounds_adjusted == 0 {
            return Err(OpError::DivisionByZero {
                operation: "target protection",
            });
        }
        // Only a zero divisor is replaced; a negative count keeps its sign in
        // both the numerator and the denominator.
        let divisor_clamped = !strict && rounds_adjusted == 0;
        if divisor_clamped {
            warn!("Adjusted rounds is 0; clamping the TP/SP divisor to 1");
        }
        let round_divisor = if divisor_clamped {
            1.0
        } else {
            rounds_adjusted as f64
        };

        // 3. Skill scaling
        let s_ma = formulas::s_ma(sdi);
        let s_mb = formulas::s_mb(sdi);

        // 4. Sub-scores
        let g_os = formulas::game_objective(sdi, s_ma, rounds_gamified, stats);
        let d_avg = formulas::average_damage(rounds_adjusted, stats);
        let t_p = formulas::target_protection(
            rounds_adjusted,
            round_divisor,
            g_os,
            s_mb,
            d_avg,
            sdi,
            stats.xpb_minus_xpa,
        );
        let z_p = formulas::survival_points(round_divisor, s_ma, s_mb, stats);

        // 5. Overall performance
        let mut radicand = t_p + z_p;
        let radicand_clamped = radicand < 0.0;
        if radicand_clamped {
            if strict {
                return Err(OpError::NegativeRadicand { value: radicand });
            }
            warn!("TP + SP is negative ({:.3}); clamping OP to 0", radicand);
            radicand = 0.0;
        }
        let raw_op = formulas::overall_performance(radicand);

        // 6. Device boost and tier
        let multiplier = device_multiplier(device);
        let boosted_op = raw_op * multiplier;
        let division = tier_lookup(boosted_op);

        let xpr = formulas::experience_rate(stats.xpb_minus_xpa, rounds_adjusted);

        debug!(
            rounds_adjusted,
            rounds_gamified,
            g_os,
            d_avg,
            t_p,
            z_p,
            raw_op,
            multiplier,
            "competitive pipeline evaluated"
        );

        let result = MetricsResult {
            op: boosted_op,
            tp: t_p,
            sp: z_p,
            go: g_os,
            ad: d_avg,
            xpr,
            division,
            sdi,
            auto_penalty,
        };

        let breakdown = Breakdown {
            rounds_played,
            rounds_adjusted,
            rounds_gamified,
            round_divisor,
            s_ma,
            s_mb,
            radicand,
            raw_op,
            device_multiplier: multiplier,
            divisor_clamped,
            radicand_clamped,
        };

        Ok((result, breakdown))
    }
}

/// Evaluates with the default clamp policy and informational penalty.
pub fn calculate(stats: &StatsInput, sdi: f64, device: &str) -> OpResult<MetricsResult> {
    MetricsCalculator::default().calculate(stats, sdi, device)
}
