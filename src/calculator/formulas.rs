//! Pure steps of the competitive OP pipeline. Each function only sees raw
//! counters and the outputs of earlier steps.

use crate::consts::{
    COMPETITIVE_OP_SCALE, PENALTY_RATIO_THRESHOLD, PENALTY_ROUNDS_PER_MISS, SDI_SLOPE_A,
    SDI_SLOPE_B,
};
use crate::stats::StatsInput;

#[inline]
fn at_least_one(rounds: i64) -> f64 {
    rounds.max(1) as f64
}

pub fn rounds_adjusted(rounds_played: i64, stats: &StatsInput) -> i64 {
    rounds_played - i64::from(stats.escapes)
}

/// Rounds in which the player could score guard objectives.
pub fn rounds_gamified(rounds_adjusted: i64, stats: &StatsInput) -> i64 {
    rounds_adjusted
        - i64::from(stats.escapes)
        - i64::from(stats.target_survival)
        - i64::from(stats.epidemic)
        - i64::from(stats.infection_survival)
        - i64::from(stats.free_for_all_wins)
}

/// Penalised rounds-played count when fewer than 12% of rounds ended in an
/// objective. Rounded to the nearest multiple of two (half away from zero)
/// and never below `rounds_played`. Zero rounds have no ratio and no penalty.
pub fn auto_penalty(rounds_played: i64, objectives: i64) -> Option<i64> {
    if rounds_played <= 0 {
        return None;
    }
    let played = rounds_played as f64;
    let ratio = objectives as f64 / played;
    if ratio >= PENALTY_RATIO_THRESHOLD {
        return None;
    }

    let missing = PENALTY_RATIO_THRESHOLD * played - objectives as f64;
    let raw = played + PENALTY_ROUNDS_PER_MISS * missing;
    let even = ((raw / 2.0).round() * 2.0) as i64;
    Some(even.max(rounds_played))
}

#[inline]
pub fn skill_multiplier(sdi: f64, slope: f64) -> f64 {
    slope * (sdi - 1.0) + 1.0
}

pub fn s_ma(sdi: f64) -> f64 {
    skill_multiplier(sdi, SDI_SLOPE_A)
}

pub fn s_mb(sdi: f64) -> f64 {
    skill_multiplier(sdi, SDI_SLOPE_B)
}

pub fn game_objective(sdi: f64, s_ma: f64, rounds_gamified: i64, stats: &StatsInput) -> f64 {
    let shots = sdi * 5.0 * f64::from(stats.final_shots);
    let protected = s_ma * 3.0 * f64::from(stats.targets_protected);
    46.0 * ((shots + protected) / at_least_one(rounds_gamified))
}

pub fn average_damage(rounds_adjusted: i64, stats: &StatsInput) -> f64 {
    let excluded = i64::from(stats.escapes)
        + i64::from(stats.target_survival)
        + i64::from(stats.epidemic);
    f64::from(stats.damage_dealt) / at_least_one(rounds_adjusted - excluded)
}

/// `divisor` stands in for `rounds_adjusted` in the denominator only.
pub fn target_protection(
    rounds_adjusted: i64,
    divisor: f64,
    g_os: f64,
    s_mb: f64,
    d_avg: f64,
    sdi: f64,
    xpb_minus_xpa: i64,
) -> f64 {
    let per_round = 2.0 * rounds_adjusted as f64 * (86.0 * g_os + s_mb * 32.0 * d_avg);
    let experience = sdi * 59.0 * xpb_minus_xpa as f64;
    (per_round + experience) / (165.0 * divisor)
}

pub fn survival_points(divisor: f64, s_ma: f64, s_mb: f64, stats: &StatsInput) -> f64 {
    let events = 9.0 * f64::from(stats.free_for_all_kills)
        + 15.0 * f64::from(stats.infected_killed)
        + 40.0 * f64::from(stats.free_for_all_wins)
        + 25.0 * f64::from(stats.infections)
        + 100.0 * f64::from(stats.epidemic);
    let survival = s_ma * 15.0 * f64::from(stats.infection_survival);
    (13.0 / divisor) * (s_mb * events + survival)
}

/// Caller guarantees a non-negative radicand.
pub fn overall_performance(radicand: f64) -> f64 {
    COMPETITIVE_OP_SCALE * radicand.sqrt()
}

pub fn experience_rate(xpb_minus_xpa: i64, rounds_adjusted: i64) -> f64 {
    xpb_minus_xpa as f64 / at_least_one(rounds_adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_multipliers_are_identity_at_one() {
        assert_eq!(s_ma(1.0), 1.0);
        assert_eq!(s_mb(1.0), 1.0);
    }

    #[test]
    fn skill_multipliers_below_one_follow_the_same_line() {
        assert!((s_ma(0.25) - 0.5).abs() < 1e-12);
        assert!((s_mb(0.25) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn penalty_absent_at_threshold() {
        // 12 of 100 is exactly the cut-off.
        assert_eq!(auto_penalty(100, 12), None);
    }

    #[test]
    fn penalty_rounds_to_even() {
        // 50 + 3 * (6 - 1) = 65 -> 66
        assert_eq!(auto_penalty(50, 1), Some(66));
        // 10 + 3 * 1.2 = 13.6 -> 14
        assert_eq!(auto_penalty(10, 0), Some(14));
    }

    #[test]
    fn penalty_never_below_rounds_played() {
        // 1 + 3 * 0.12 = 1.36 -> 2 (rounds up past the floor)
        assert_eq!(auto_penalty(1, 0), Some(2));
        // 3 + 3 * 0.36 = 4.08 -> 4
        assert_eq!(auto_penalty(3, 0), Some(4));
    }

    #[test]
    fn zero_rounds_have_no_penalty() {
        assert_eq!(auto_penalty(0, 0), None);
    }

    #[test]
    fn average_damage_excludes_non_combat_rounds() {
        let stats = StatsInput {
            damage_dealt: 600,
            escapes: 1,
            target_survival: 2,
            epidemic: 1,
            ..Default::default()
        };
        // 10 - (1 + 2 + 1) = 6
        assert_eq!(average_damage(10, &stats), 100.0);
    }

    #[test]
    fn experience_rate_guards_zero_rounds() {
        assert_eq!(experience_rate(50, 0), 50.0);
        assert_eq!(experience_rate(-30, 3), -10.0);
    }
}
