use crate::reports;
use clap::Args;
use opforge::calculator::MetricsCalculator;
use opforge::config::CalcConfig;
use opforge::consts::{DEFAULT_DEVICE, DEFAULT_SDI};
use opforge::error::OpResult;
use opforge::stats::StatsInput;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub config: CalcConfig,

    /// JSON object mapping every stats field to an integer
    #[arg(short, long)]
    pub stats: String,

    #[arg(long, default_value_t = DEFAULT_SDI)]
    pub sdi: f64,

    #[arg(long, default_value = DEFAULT_DEVICE)]
    pub device: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: EvalArgs, config: CalcConfig, debug: bool) -> OpResult<()> {
    info!("Loading stats from: {}", args.stats);
    let stats = StatsInput::load_from_file(&args.stats)?;

    let calculator = MetricsCalculator::new(config);
    let (result, breakdown) = calculator.calculate_detailed(&stats, args.sdi, &args.device)?;

    if args.json {
        reports::print_json(&result)?;
    } else {
        reports::print_metrics(&result, stats.rounds_played);
        if debug {
            reports::print_breakdown(&breakdown);
        }
    }
    Ok(())
}
