use crate::{
    constants::{
        DIRECTIONS_PER_GAME, INTER_DIVISION_GAMES, INTRA_DIVISION_GAMES, LATE_SEASON_WEEKS,
        REMATCH_WINDOW,
    },
    error::Result,
    league::{LeagueParams, Team, Week},
    model::{
        ConstraintKind, DecisionVariable, Lattice, LinearConstraint, Model, Objective, Sense, VarId,
    },
};

/// Builds the scheduling model for a league.
///
/// Parameters are validated before anything is allocated. Constraint groups
/// are appended in a fixed order (no self-play, weekly load, symmetry,
/// intra-division, inter-division, no rematch) so constraint ids are stable.
pub fn build(params: &LeagueParams) -> Result<Model> {
    params.validate()?;
    log::info!(
        "building model: teams={}, split={}, weeks={}",
        params.num_teams,
        params.division_split,
        params.num_weeks
    );

    let lattice = Lattice::new(params.num_teams, params.num_weeks);
    let variables = create_decision_variables(&lattice);
    log::info!("number of variables: {}", variables.len());

    let mut constraints = Vec::new();
    add_no_self_play(&mut constraints, params, &lattice);
    add_weekly_load(&mut constraints, params, &lattice);
    add_symmetry(&mut constraints, params, &lattice);
    add_division_totals(&mut constraints, params, &lattice);
    add_no_rematch(&mut constraints, params, &lattice);

    for kind in ConstraintKind::ALL {
        log::debug!(
            "{} constraints: {}",
            kind,
            constraints.iter().filter(|c| c.kind == kind).count()
        );
    }
    log::info!("number of constraints: {}", constraints.len());

    let objective = build_late_season_objective(params, &lattice);

    Ok(Model {
        params: *params,
        lattice,
        variables,
        constraints,
        objective: Some(objective),
    })
}

/// x_{i,j,w} ∈ {0,1} for all i, j, w (including i = j, pinned to 0 below)
fn create_decision_variables(lattice: &Lattice) -> Vec<DecisionVariable> {
    lattice
        .triples()
        .map(|(team_i, team_j, week)| DecisionVariable {
            team_i,
            team_j,
            week,
        })
        .collect()
}

/// x_{t,t,w} = 0 ∀t, w
fn add_no_self_play(
    constraints: &mut Vec<LinearConstraint>,
    params: &LeagueParams,
    lattice: &Lattice,
) {
    for week in params.weeks() {
        for team in params.teams() {
            constraints.push(LinearConstraint::equal(
                ConstraintKind::NoSelfPlay,
                vec![(lattice.var(team, team, week), 1.0)],
                0.0,
            ));
        }
    }
}

/// Σ_{j≠t} (x_{t,j,w} + x_{j,t,w}) = 2 ∀t, w
///
/// One game per week, counted once per direction.
fn add_weekly_load(
    constraints: &mut Vec<LinearConstraint>,
    params: &LeagueParams,
    lattice: &Lattice,
) {
    for week in params.weeks() {
        for team in params.teams() {
            constraints.push(LinearConstraint::equal(
                ConstraintKind::WeeklyLoad,
                team_terms_for_week(params, lattice, team, week),
                DIRECTIONS_PER_GAME as f64,
            ));
        }
    }
}

/// x_{i,j,w} - x_{j,i,w} = 0 ∀i<j, w
fn add_symmetry(
    constraints: &mut Vec<LinearConstraint>,
    params: &LeagueParams,
    lattice: &Lattice,
) {
    for (i, j) in params.pairs() {
        for week in params.weeks() {
            constraints.push(LinearConstraint::equal(
                ConstraintKind::Symmetry,
                vec![(lattice.var(i, j, week), 1.0), (lattice.var(j, i, week), -1.0)],
                0.0,
            ));
        }
    }
}

/// Σ_w (x_{i,j,w} + x_{j,i,w}) = 2 · games(i, j) ∀i<j
///
/// 4 for division rivals (two meetings), 2 across divisions (one meeting).
/// All intra-division pairs are added before the inter-division ones.
fn add_division_totals(
    constraints: &mut Vec<LinearConstraint>,
    params: &LeagueParams,
    lattice: &Lattice,
) {
    let (intra, inter): (Vec<_>, Vec<_>) = params
        .pairs()
        .partition(|&(i, j)| params.same_division(i, j));

    for (i, j) in intra {
        constraints.push(LinearConstraint::equal(
            ConstraintKind::IntraDivision,
            pair_terms_all_weeks(params, lattice, i, j),
            (INTRA_DIVISION_GAMES * DIRECTIONS_PER_GAME) as f64,
        ));
    }

    for (i, j) in inter {
        constraints.push(LinearConstraint::equal(
            ConstraintKind::InterDivision,
            pair_terms_all_weeks(params, lattice, i, j),
            (INTER_DIVISION_GAMES * DIRECTIONS_PER_GAME) as f64,
        ));
    }
}

/// Σ_{k=0}^{3} x_{i,j,w+k} ≤ 1 ∀i<j, ∀w with w+3 < W
///
/// Only the i→j direction is summed; symmetry makes the other redundant.
fn add_no_rematch(
    constraints: &mut Vec<LinearConstraint>,
    params: &LeagueParams,
    lattice: &Lattice,
) {
    let last_start = params.num_weeks - REMATCH_WINDOW;
    for (i, j) in params.pairs() {
        for start in 0..=last_start {
            let terms = (start..start + REMATCH_WINDOW)
                .map(|week| (lattice.var(i, j, week), 1.0))
                .collect();
            constraints.push(LinearConstraint::range(
                ConstraintKind::NoRematch,
                terms,
                0.0,
                1.0,
            ));
        }
    }
}

/// max Σ_{i≠j, same division} Σ_{w ∈ last 2 weeks} x_{i,j,w}
///
/// Prefers division games at the end of the season so a cross-division pair
/// is less likely to meet again right after the schedule ends.
fn build_late_season_objective(params: &LeagueParams, lattice: &Lattice) -> Objective {
    let first_late_week = params.num_weeks.saturating_sub(LATE_SEASON_WEEKS);
    let mut terms = Vec::new();
    for i in params.teams() {
        for j in params.teams() {
            if i == j || !params.same_division(i, j) {
                continue;
            }
            for week in first_late_week..params.num_weeks {
                terms.push((lattice.var(i, j, week), 1.0));
            }
        }
    }

    Objective {
        sense: Sense::Maximize,
        terms,
    }
}

/// Every directional variable involving `team` in `week`, excluding self-play
fn team_terms_for_week(
    params: &LeagueParams,
    lattice: &Lattice,
    team: Team,
    week: Week,
) -> Vec<(VarId, f64)> {
    let mut terms = Vec::with_capacity(2 * (params.num_teams - 1));
    for i in params.teams() {
        for j in params.teams() {
            if i != j && (i == team || j == team) {
                terms.push((lattice.var(i, j, week), 1.0));
            }
        }
    }
    terms
}

/// Both directions of the pair over every week
fn pair_terms_all_weeks(
    params: &LeagueParams,
    lattice: &Lattice,
    i: Team,
    j: Team,
) -> Vec<(VarId, f64)> {
    params
        .weeks()
        .flat_map(|week| [(lattice.var(i, j, week), 1.0), (lattice.var(j, i, week), 1.0)])
        .collect()
}
