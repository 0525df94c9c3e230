use anyhow::{Context, Result, bail};
use clap::Parser;
use league_scheduler::{LeagueParams, build, read_schedule_csv};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Check a schedule CSV against the league rules", long_about = None)]
struct Args {
    /// Schedule file (Week,Team1,Team2)
    schedule: PathBuf,

    #[arg(short = 't', long = "teams", default_value_t = 10)]
    teams: usize,

    #[arg(short = 's', long = "split", default_value_t = 5)]
    split: usize,

    #[arg(short = 'w', long = "weeks", default_value_t = 13)]
    weeks: usize,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let params = LeagueParams::new(args.teams, args.split, args.weeks);
    let model = build(&params)?;
    let schedule = read_schedule_csv(&args.schedule)
        .with_context(|| format!("reading {}", args.schedule.display()))?;
    info!(
        "Loaded {} fixtures from {}",
        schedule.len(),
        args.schedule.display()
    );

    let values = schedule.assignment(&model)?;
    let violations = model.check(&values)?;
    if !violations.is_empty() {
        for v in &violations {
            error!("{v}");
        }
        bail!("{} constraint violations", violations.len());
    }

    if let Some(objective) = model.objective_value(&values) {
        info!("Objective value = {objective}");
    }
    info!("Schedule satisfies every rule");
    Ok(())
}
