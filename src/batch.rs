use crate::calculator::{MetricsCalculator, MetricsResult};
use crate::consts::{DEFAULT_DEVICE, DEFAULT_SDI};
use crate::error::{OpError, OpResult};
use crate::stats::{StatsInput, FIELD_NAMES};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub player: String,
    pub stats: StatsInput,
    pub sdi: f64,
    pub device: String,
}

#[derive(Debug)]
pub struct RosterOutcome {
    pub player: String,
    pub result: OpResult<MetricsResult>,
}

/// Reads a roster CSV. The header row names the columns; the 14 stats
/// fields are required, `player`, `sdi` and `device` are optional and any
/// other column is ignored.
pub fn load_roster<R: Read>(reader: R) -> OpResult<Vec<RosterEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let player_col = column("player");
    let sdi_col = column("sdi");
    let device_col = column("device");
    let stat_cols: Vec<(&str, usize)> = FIELD_NAMES
        .iter()
        .filter_map(|&name| column(name).map(|idx| (name, idx)))
        .collect();

    let mut entries = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let mut map = BTreeMap::new();
        for &(name, idx) in &stat_cols {
            let cell = record.get(idx).unwrap_or("");
            let value: i64 = cell.parse().map_err(|_| {
                OpError::Parse(format!("row {}, column {}: invalid value '{}'", row, name, cell))
            })?;
            map.insert(name.to_string(), value);
        }
        let stats = StatsInput::from_map(&map)?;

        let optional = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|cell| !cell.is_empty())
        };

        let sdi = match optional(sdi_col) {
            Some(cell) => cell.parse().map_err(|_| {
                OpError::Parse(format!("row {}, column sdi: invalid value '{}'", row, cell))
            })?,
            None => DEFAULT_SDI,
        };
        let device = optional(device_col)
            .map_or_else(|| DEFAULT_DEVICE.to_string(), str::to_lowercase);
        let player = optional(player_col)
            .map_or_else(|| format!("row {}", row), str::to_string);

        entries.push(RosterEntry {
            player,
            stats,
            sdi,
            device,
        });
    }

    debug!("Loaded {} roster rows", entries.len());
    Ok(entries)
}

pub fn load_roster_file<P: AsRef<Path>>(path: P) -> OpResult<Vec<RosterEntry>> {
    let file = File::open(path)?;
    load_roster(file)
}

/// Evaluates every entry in parallel. Output order matches input order.
pub fn evaluate_roster(calculator: &MetricsCalculator, entries: &[RosterEntry]) -> Vec<RosterOutcome> {
    info!("Evaluating {} roster entries", entries.len());
    entries
        .par_iter()
        .map(|entry| RosterOutcome {
            player: entry.player.clone(),
            result: calculator.calculate(&entry.stats, entry.sdi, &entry.device),
        })
        .collect()
}

/// Successes by OP descending, then failures in their original order.
pub fn rank(mut outcomes: Vec<RosterOutcome>) -> Vec<RosterOutcome> {
    outcomes.sort_by(|a, b| match (&a.result, &b.result) {
        (Ok(x), Ok(y)) => y.op.partial_cmp(&x.op).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    });
    outcomes
}
