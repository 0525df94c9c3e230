use anyhow::{Context, Result};
use clap::Parser;
use league_scheduler::{
    Backend, Config, GoodLpOracle, LeagueParams, OutputFormat, export::default_output_path,
    export_schedule, generate,
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate a two-division round-robin league schedule", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of teams (overrides config)
    #[arg(short = 't', long = "teams")]
    teams: Option<usize>,

    /// First team index of division B (overrides config)
    #[arg(short = 's', long = "split")]
    split: Option<usize>,

    /// Number of weeks (overrides config)
    #[arg(short = 'w', long = "weeks")]
    weeks: Option<usize>,

    /// Solver backend: cbc | microlp
    #[arg(short = 'b', long = "backend")]
    backend: Option<Backend>,

    /// Solver time limit in seconds
    #[arg(long = "time-limit")]
    time_limit: Option<f64>,

    /// Output file (defaults to a timestamped file in the configured directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: csv | json
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) if path.exists() => Config::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        Some(path) => {
            warn!(
                "Config file not found: {}, using default settings",
                path.display()
            );
            Config::default()
        }
        None => Config::default(),
    };
    apply_overrides(&mut config, &args);
    config.validate().context("invalid settings")?;

    let LeagueParams {
        num_teams,
        division_split,
        num_weeks,
    } = config.league;
    info!("League: {num_teams} teams (split at {division_split}), {num_weeks} weeks");
    info!("Solver: {}", config.solver.backend);

    let oracle = GoodLpOracle::new(config.oracle_options());
    let generated = generate(&config.league, &oracle)?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&config.output.dir, config.output.format));
    let written = export_schedule(generated.schedule.fixtures(), &path, config.output.format)
        .with_context(|| format!("writing schedule to {}", path.display()))?;

    info!("Schedule saved to: {}", written.display());
    if let Some(objective) = generated.objective {
        info!("Late-season division game indicators: {objective}");
    }
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(teams) = args.teams {
        config.league.num_teams = teams;
    }
    if let Some(split) = args.split {
        config.league.division_split = split;
    }
    if let Some(weeks) = args.weeks {
        config.league.num_weeks = weeks;
    }
    if let Some(backend) = args.backend {
        config.solver.backend = backend;
    }
    if let Some(secs) = args.time_limit {
        config.solver.time_limit_secs = Some(secs);
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
}
