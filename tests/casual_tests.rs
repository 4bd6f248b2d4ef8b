use approx::assert_relative_eq;
use opforge::casual::{total_experience, CasualCalculator, CasualStats, StatsScope};
use opforge::config::{CalcConfig, GuardPolicy};
use opforge::division::{Division, Ladder};
use opforge::error::OpError;
use rstest::rstest;

fn season_sheet() -> CasualStats {
    "10 100 12 50 2000 0 40 300 150 200000 220 60 90 12 150 30 70 5"
        .parse()
        .unwrap()
}

#[test]
fn test_parse_follows_paste_order() {
    let s = season_sheet();
    assert_eq!((s.lva, s.xpa, s.lvb, s.xpb), (10, 100, 12, 50));
    assert_eq!(s.rounds_played, 2000);
    assert_eq!(s.guards_killed, 300);
    assert_eq!(s.target_survivals, 60);
    assert_eq!(s.epidemics, 5);
}

#[test]
fn test_total_experience_levels() {
    assert_eq!(total_experience(10, 100).unwrap(), 12860);
    assert_eq!(total_experience(12, 50).unwrap(), 19290);
}

#[test]
fn test_unreachable_level_is_rejected() {
    assert!(matches!(
        total_experience(2000, 0),
        Err(OpError::Validation(_))
    ));

    let sheet = CasualStats {
        lvb: 3000,
        rounds_played: 10,
        ..Default::default()
    };
    let err = CasualCalculator::default().calculate(&sheet).unwrap_err();
    assert!(err.to_string().contains("level 3000"), "{}", err);
}

#[test]
fn test_season_sheet() {
    let result = CasualCalculator::default().calculate(&season_sheet()).unwrap();

    assert_eq!(result.experience_difference, 6430);
    assert_eq!(result.adjusted_rounds, 1960);
    assert_relative_eq!(result.experience_per_round, 6430.0 / 1960.0, max_relative = 1e-12);
    assert_relative_eq!(result.average_damage, 107.81671159029649, max_relative = 1e-9);
    assert_relative_eq!(result.assassin_aggression, 19.387755102040817, max_relative = 1e-9);
    assert_relative_eq!(result.guard_objective, 38.47214561500276, max_relative = 1e-9);
    assert_relative_eq!(result.z_factor, 37.46938775510204, max_relative = 1e-9);
    assert_relative_eq!(result.performance_score, 85.74789086002023, max_relative = 1e-9);
    assert_relative_eq!(result.op, 305.259016169361, max_relative = 1e-9);
    assert_eq!(result.division, Division::Ember);
    assert_eq!(result.scope, StatsScope::Casual);
    assert_eq!(result.scope.to_string(), "casual stats");
}

#[rstest]
#[case(945.0, Division::Kugelblitz)]
#[case(944.9, Division::Radiance)]
#[case(900.0, Division::Radiance)]
#[case(840.0, Division::Firestorm)]
#[case(785.0, Division::Flashover)]
#[case(735.0, Division::Magnesium)]
#[case(670.0, Division::Thermite)]
#[case(605.0, Division::Propane)]
#[case(535.0, Division::Wood)]
#[case(534.9, Division::Ember)]
fn test_casual_ladder(#[case] op: f64, #[case] expected: Division) {
    assert_eq!(Ladder::Casual.division_for(op), expected);
}

#[test]
fn test_casual_ladder_is_softer() {
    // 950 is only Radiance on the competitive ladder.
    assert_eq!(Ladder::Competitive.division_for(950.0), Division::Radiance);
    assert_eq!(Ladder::Casual.division_for(950.0), Division::Kugelblitz);
}

#[test]
fn test_zero_rounds_follow_guard_policy() {
    let empty = CasualStats::default();

    let clamped = CasualCalculator::default().calculate(&empty).unwrap();
    assert_eq!(clamped.op, 0.0);
    assert_eq!(clamped.scope, StatsScope::Competitive);

    let strict = CasualCalculator::new(CalcConfig {
        guard_policy: GuardPolicy::Strict,
        ..CalcConfig::default()
    });
    assert!(matches!(
        strict.calculate(&empty),
        Err(OpError::DivisionByZero { .. })
    ));
}

#[test]
fn test_level_loss_can_zero_the_score() {
    let sheet = CasualStats {
        lva: 20,
        lvb: 5,
        rounds_played: 10,
        ..Default::default()
    };
    let result = CasualCalculator::default().calculate(&sheet).unwrap();
    assert!(result.experience_difference < 0);
    assert_eq!(result.op, 0.0);

    let strict = CasualCalculator::new(CalcConfig {
        guard_policy: GuardPolicy::Strict,
        ..CalcConfig::default()
    });
    assert!(matches!(
        strict.calculate(&sheet),
        Err(OpError::NegativeRadicand { .. })
    ));
}

#[test]
fn test_more_escapes_than_rounds_keeps_sign() {
    let sheet = CasualStats {
        lvb: 2,
        rounds_played: 5,
        escapes: 10,
        damage_dealt: 1000,
        final_shots: 5,
        ..Default::default()
    };
    let result = CasualCalculator::default().calculate(&sheet).unwrap();

    assert_eq!(result.adjusted_rounds, -5);
    assert_relative_eq!(result.performance_score, 3185.757575757576, max_relative = 1e-9);
    assert_relative_eq!(result.op, 1552.1691810710154, max_relative = 1e-9);
    assert_eq!(result.division, Division::Kugelblitz);
}
