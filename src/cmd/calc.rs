use crate::reports;
use clap::Args;
use opforge::calculator::MetricsCalculator;
use opforge::config::CalcConfig;
use opforge::error::OpResult;
use opforge::stats::Copypasta;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub config: CalcConfig,

    /// Print the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// xpb_minus_xpa rounds_played targets_assassinated escapes targets_protected
    /// damage_dealt final_shots target_survival free_for_all_kills free_for_all_wins
    /// infected_killed infection_survival infections epidemic sdi device
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub values: Vec<String>,
}

pub fn run(args: CalcArgs, config: CalcConfig, debug: bool) -> OpResult<()> {
    let paste: Copypasta = args.values.join(" ").parse()?;
    info!(
        "Scoring {} rounds on {} (SDI {:.4}, {} guards, {} penalty)",
        paste.stats.rounds_played, paste.device, paste.sdi, config.guard_policy, config.penalty_mode
    );

    let calculator = MetricsCalculator::new(config);
    let (result, breakdown) = calculator.calculate_detailed(&paste.stats, paste.sdi, &paste.device)?;

    if args.json {
        reports::print_json(&result)?;
    } else {
        reports::print_metrics(&result, paste.stats.rounds_played);
        if debug {
            reports::print_breakdown(&breakdown);
        }
    }
    Ok(())
}
