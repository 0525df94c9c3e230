use crate::{
    error::Result,
    extract::{Schedule, extract},
    league::LeagueParams,
    model::build,
    oracle::{Oracle, SolveStats},
};

/// Result of one build → solve → extract run
#[derive(Debug, Clone)]
pub struct GeneratedSchedule {
    pub params: LeagueParams,
    pub schedule: Schedule,
    pub objective: Option<f64>,
    pub stats: SolveStats,
}

/// Generates a full season or fails; never returns a partial schedule.
pub fn generate<O: Oracle + ?Sized>(params: &LeagueParams, oracle: &O) -> Result<GeneratedSchedule> {
    log::info!("=== start schedule generation ===");
    let model = build(params)?;

    let solution = oracle.solve(&model)?;
    log::info!("Problem solved in {} milliseconds", solution.stats.wall_time.as_millis());
    if let Some(iterations) = solution.stats.iterations {
        log::info!("Problem solved in {} iterations", iterations);
    }
    if let Some(nodes) = solution.stats.nodes {
        log::info!("Problem solved in {} branch-and-bound nodes", nodes);
    }

    let fixtures = extract(&model, &solution)?;
    if let Some(objective) = solution.objective {
        log::info!("Objective value = {}", objective);
    }

    log::info!("=== successfully generated {} fixtures ===", fixtures.len());
    Ok(GeneratedSchedule {
        params: *params,
        schedule: Schedule::new(fixtures),
        objective: solution.objective,
        stats: solution.stats,
    })
}
