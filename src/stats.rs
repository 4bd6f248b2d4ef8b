use crate::consts::COMPETITIVE_FIELD_COUNT;
use crate::error::{OpError, OpResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Per-match counters for one player's competitive sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsInput {
    pub rounds_played: u32,
    pub damage_dealt: u32,
    pub targets_assassinated: u32,
    pub target_survival: u32,
    pub free_for_all_kills: u32,
    pub free_for_all_wins: u32,
    pub infected_killed: u32,
    pub infection_survival: u32,
    pub infections: u32,
    pub escapes: u32,
    pub final_shots: u32,
    pub targets_protected: u32,
    pub epidemic: u32,
    /// Experience delta between the two screenshots; may be negative.
    pub xpb_minus_xpa: i64,
}

/// Every key a stats map must carry.
pub const FIELD_NAMES: [&str; 14] = [
    "rounds_played",
    "damage_dealt",
    "targets_assassinated",
    "target_survival",
    "free_for_all_kills",
    "free_for_all_wins",
    "infected_killed",
    "infection_survival",
    "infections",
    "escapes",
    "final_shots",
    "targets_protected",
    "epidemic",
    "xpb_minus_xpa",
];

impl StatsInput {
    /// Builds a record from a name → value map, rejecting absent keys before
    /// any arithmetic happens. Unknown keys are ignored.
    pub fn from_map(map: &BTreeMap<String, i64>) -> OpResult<Self> {
        let get = |name: &str| -> OpResult<i64> {
            map.get(name)
                .copied()
                .ok_or_else(|| OpError::MissingField(name.to_string()))
        };
        let counter = |name: &str| -> OpResult<u32> {
            let value = get(name)?;
            u32::try_from(value).map_err(|_| {
                OpError::Validation(format!("{} must be a non-negative count, got {}", name, value))
            })
        };

        Ok(Self {
            rounds_played: counter("rounds_played")?,
            damage_dealt: counter("damage_dealt")?,
            targets_assassinated: counter("targets_assassinated")?,
            target_survival: counter("target_survival")?,
            free_for_all_kills: counter("free_for_all_kills")?,
            free_for_all_wins: counter("free_for_all_wins")?,
            infected_killed: counter("infected_killed")?,
            infection_survival: counter("infection_survival")?,
            infections: counter("infections")?,
            escapes: counter("escapes")?,
            final_shots: counter("final_shots")?,
            targets_protected: counter("targets_protected")?,
            epidemic: counter("epidemic")?,
            xpb_minus_xpa: get("xpb_minus_xpa")?,
        })
    }

    pub fn from_json_str(json: &str) -> OpResult<Self> {
        let map: BTreeMap<String, i64> = serde_json::from_str(json)?;
        Self::from_map(&map)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OpResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Rounds that ended with the player assassinating or surviving as target.
    pub fn objectives(&self) -> i64 {
        i64::from(self.targets_assassinated) + i64::from(self.target_survival)
    }
}

/// A fully parsed competitive copypasta: the stats plus the two trailing
/// settings that ride along with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Copypasta {
    pub stats: StatsInput,
    pub sdi: f64,
    pub device: String,
}

impl FromStr for Copypasta {
    type Err = OpError;

    fn from_str(s: &str) -> OpResult<Self> {
        parse_copypasta(s)
    }
}

/// Parses the 16-value copypasta players paste from their stat screens:
///
/// `xpb_minus_xpa rounds_played targets_assassinated escapes targets_protected
/// damage_dealt final_shots target_survival free_for_all_kills free_for_all_wins
/// infected_killed infection_survival infections epidemic sdi device`
pub fn parse_copypasta(input: &str) -> OpResult<Copypasta> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != COMPETITIVE_FIELD_COUNT {
        return Err(OpError::Parse(format!(
            "expected {} values, got {}",
            COMPETITIVE_FIELD_COUNT,
            tokens.len()
        )));
    }

    let stats = StatsInput {
        xpb_minus_xpa: parse_token(tokens[0], "xpb_minus_xpa")?,
        rounds_played: parse_token(tokens[1], "rounds_played")?,
        targets_assassinated: parse_token(tokens[2], "targets_assassinated")?,
        escapes: parse_token(tokens[3], "escapes")?,
        targets_protected: parse_token(tokens[4], "targets_protected")?,
        damage_dealt: parse_token(tokens[5], "damage_dealt")?,
        final_shots: parse_token(tokens[6], "final_shots")?,
        target_survival: parse_token(tokens[7], "target_survival")?,
        free_for_all_kills: parse_token(tokens[8], "free_for_all_kills")?,
        free_for_all_wins: parse_token(tokens[9], "free_for_all_wins")?,
        infected_killed: parse_token(tokens[10], "infected_killed")?,
        infection_survival: parse_token(tokens[11], "infection_survival")?,
        infections: parse_token(tokens[12], "infections")?,
        epidemic: parse_token(tokens[13], "epidemic")?,
    };

    Ok(Copypasta {
        stats,
        sdi: parse_token(tokens[14], "sdi")?,
        device: tokens[15].to_lowercase(),
    })
}

pub(crate) fn parse_token<T: FromStr>(token: &str, name: &str) -> OpResult<T> {
    token
        .parse()
        .map_err(|_| OpError::Parse(format!("invalid value '{}' for {}", token, name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copypasta_maps_positions_to_fields() {
        let paste = parse_copypasta("-40 12 3 1 2 900 4 5 6 7 8 9 10 11 1.25 Console").unwrap();
        assert_eq!(paste.stats.xpb_minus_xpa, -40);
        assert_eq!(paste.stats.rounds_played, 12);
        assert_eq!(paste.stats.escapes, 1);
        assert_eq!(paste.stats.damage_dealt, 900);
        assert_eq!(paste.stats.target_survival, 5);
        assert_eq!(paste.stats.epidemic, 11);
        assert_eq!(paste.sdi, 1.25);
        assert_eq!(paste.device, "console");
    }

    #[test]
    fn copypasta_parses_through_from_str() {
        let paste: Copypasta = "100 10 3 0 1 500 2 1 0 0 0 0 0 0 1 pc".parse().unwrap();
        assert_eq!(paste, parse_copypasta("100 10 3 0 1 500 2 1 0 0 0 0 0 0 1 pc").unwrap());
        assert!("100 10".parse::<Copypasta>().is_err());
    }

    #[test]
    fn copypasta_rejects_wrong_count() {
        let err = parse_copypasta("1 2 3").unwrap_err();
        assert!(matches!(err, OpError::Parse(ref m) if m.contains("expected 16 values, got 3")));
    }

    #[test]
    fn copypasta_names_bad_token() {
        let err = parse_copypasta("0 ten 0 0 0 0 0 0 0 0 0 0 0 0 1 pc").unwrap_err();
        assert!(err.to_string().contains("rounds_played"));
    }

    #[test]
    fn map_reports_first_missing_field() {
        let mut map: BTreeMap<String, i64> =
            FIELD_NAMES.iter().map(|n| (n.to_string(), 1)).collect();
        map.remove("epidemic");
        let err = StatsInput::from_map(&map).unwrap_err();
        assert!(matches!(err, OpError::MissingField(ref f) if f == "epidemic"));
    }

    #[test]
    fn map_rejects_negative_counter() {
        let mut map: BTreeMap<String, i64> =
            FIELD_NAMES.iter().map(|n| (n.to_string(), 0)).collect();
        map.insert("escapes".to_string(), -1);
        assert!(matches!(
            StatsInput::from_map(&map),
            Err(OpError::Validation(_))
        ));
    }
}
