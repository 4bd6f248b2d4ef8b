use clap::{Args, Command, FromArgMatches};
use opforge::config::{CalcConfig, GuardPolicy, PenaltyMode};
use opforge::error::OpError;
use std::fs;

// Parse CalcConfig the way a subcommand would, without going through main.rs.
fn parse_cli(args: &[&str]) -> (CalcConfig, clap::ArgMatches) {
    let cmd = CalcConfig::augment_args(Command::new("test"));
    let matches = cmd
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .unwrap();
    let config = CalcConfig::from_arg_matches(&matches).unwrap();
    (config, matches)
}

#[test]
fn test_defaults() {
    let config = CalcConfig::default();
    assert_eq!(config.guard_policy, GuardPolicy::Clamp);
    assert_eq!(config.penalty_mode, PenaltyMode::Informational);

    let (parsed, _) = parse_cli(&[]);
    assert_eq!(parsed.guard_policy, config.guard_policy);
    assert_eq!(parsed.penalty_mode, config.penalty_mode);
}

#[test]
fn test_load_from_file_fills_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.json");
    fs::write(&path, r#"{ "penalty_mode": "applied" }"#).unwrap();

    let config = CalcConfig::load_from_file(&path).unwrap();
    assert_eq!(config.penalty_mode, PenaltyMode::Applied);
    assert_eq!(config.guard_policy, GuardPolicy::Clamp);
}

#[test]
fn test_load_from_file_rejects_unknown_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.json");
    fs::write(&path, r#"{ "guard_policy": "lenient" }"#).unwrap();

    assert!(matches!(
        CalcConfig::load_from_file(&path),
        Err(OpError::Json(_))
    ));
}

#[test]
fn test_cli_overrides_only_typed_flags() {
    let mut from_file = CalcConfig {
        guard_policy: GuardPolicy::Strict,
        penalty_mode: PenaltyMode::Applied,
    };

    // Only the guard policy is typed; the penalty mode default must not win.
    let (cli, matches) = parse_cli(&["--guard-policy", "clamp"]);
    from_file.merge_from_cli(&cli, &matches);

    assert_eq!(from_file.guard_policy, GuardPolicy::Clamp);
    assert_eq!(from_file.penalty_mode, PenaltyMode::Applied);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = CalcConfig {
        guard_policy: GuardPolicy::Strict,
        penalty_mode: PenaltyMode::Applied,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"strict\""));
    let back: CalcConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.guard_policy, GuardPolicy::Strict);
    assert_eq!(back.penalty_mode, PenaltyMode::Applied);
}
