use crate::reports;
use clap::Args;
use opforge::casual::{CasualCalculator, CasualStats};
use opforge::config::CalcConfig;
use opforge::error::OpResult;

#[derive(Args, Debug, Clone)]
pub struct CasualArgs {
    #[command(flatten)]
    pub config: CalcConfig,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// lva xpa lvb xpb rounds_played targets_assassinated escapes guards_killed
    /// targets_protected damage_dealt final_shots target_survivals ffa_kills
    /// ffa_wins infected_killed infection_survival infections epidemics
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,
}

pub fn run(args: CasualArgs, config: CalcConfig) -> OpResult<()> {
    let stats: CasualStats = args.values.join(" ").parse()?;
    let result = CasualCalculator::new(config).calculate(&stats)?;

    if args.json {
        reports::print_json(&result)?;
    } else {
        reports::print_casual(&result);
    }
    Ok(())
}
