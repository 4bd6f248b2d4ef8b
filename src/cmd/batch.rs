use crate::reports;
use clap::Args;
use opforge::batch::{evaluate_roster, load_roster_file, rank};
use opforge::calculator::MetricsCalculator;
use opforge::config::CalcConfig;
use opforge::error::OpResult;
use serde_json::json;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: CalcConfig,

    /// Roster CSV with one player per row
    pub roster: String,

    /// Only show the best N players
    #[arg(long)]
    pub top: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, config: CalcConfig) -> OpResult<()> {
    info!("Loading roster: {}", args.roster);
    let entries = load_roster_file(&args.roster)?;

    let calculator = MetricsCalculator::new(config);
    let mut ranked = rank(evaluate_roster(&calculator, &entries));

    let failures = ranked.iter().filter(|o| o.result.is_err()).count();
    if failures > 0 {
        warn!("{} of {} rows could not be scored", failures, ranked.len());
    }
    if let Some(n) = args.top {
        ranked.truncate(n);
    }

    if args.json {
        let rows: Vec<_> = ranked
            .iter()
            .map(|o| match &o.result {
                Ok(r) => json!({ "player": o.player, "result": r }),
                Err(e) => json!({ "player": o.player, "error": e.to_string() }),
            })
            .collect();
        reports::print_json(&rows)?;
    } else {
        reports::print_roster(&ranked);
    }
    Ok(())
}
