use crate::error::OpResult;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

/// How the pipeline treats denominators that can reach zero and a negative
/// total under the final square root.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GuardPolicy {
    /// Clamp every round count used as a divisor to at least 1 and a negative
    /// radicand to 0.
    #[default]
    Clamp,
    /// Report zero divisors and negative radicands as errors.
    Strict,
}

/// Whether the auto penalty only gets reported or also replaces the
/// rounds-played count before the pipeline runs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PenaltyMode {
    #[default]
    Informational,
    Applied,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    #[arg(long, value_enum, default_value_t = GuardPolicy::Clamp)]
    pub guard_policy: GuardPolicy,

    #[arg(long, value_enum, default_value_t = PenaltyMode::Informational)]
    pub penalty_mode: PenaltyMode,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            guard_policy: GuardPolicy::Clamp,
            penalty_mode: PenaltyMode::Informational,
        }
    }
}

impl CalcConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OpResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the flags that were typed on the command line, so a
    /// config file keeps its values wherever clap fell back to a default.
    pub fn merge_from_cli(&mut self, cli_config: &CalcConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_config.$field;
                }
            };
        }

        update_if_present!(guard_policy, "guard_policy");
        update_if_present!(penalty_mode, "penalty_mode");
    }
}
