use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use opforge::config::CalcConfig;
use opforge::error::OpResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Competitive OP calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with calculator settings; flags typed on the command line win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a 16-value competitive copypasta
    Calc(cmd::calc::CalcArgs),
    /// Score a stats JSON file
    Eval(cmd::eval::EvalArgs),
    /// Score an 18-value casual/lifetime copypasta
    Casual(cmd::casual::CasualArgs),
    /// Score and rank a roster CSV
    Batch(cmd::batch::BatchArgs),
    /// Print the division cut-offs
    Divisions,
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &CalcConfig,
    sub_matches: Option<&ArgMatches>,
) -> OpResult<CalcConfig> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("Loading calculator settings from: {}", path);
    let mut config = CalcConfig::load_from_file(path)?;
    if let Some(matches) = sub_matches {
        config.merge_from_cli(cli_config, matches);
    }
    Ok(config)
}

fn run(cli: Cli, matches: &ArgMatches) -> OpResult<()> {
    let sub_matches = matches.subcommand().map(|(_, m)| m);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Calc(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::calc::run(args, config, cli.debug)
        }
        Commands::Eval(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::eval::run(args, config, cli.debug)
        }
        Commands::Casual(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::casual::run(args, config)
        }
        Commands::Batch(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::batch::run(args, config)
        }
        Commands::Divisions => {
            reports::print_divisions();
            Ok(())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}
