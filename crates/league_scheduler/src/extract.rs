use crate::{
    constants::SOLUTION_THRESHOLD,
    error::{Result, ScheduleError},
    league::{Team, Week},
    model::Model,
    oracle::Solution,
};
use serde::{Deserialize, Serialize};

/// One scheduled game. `home < away` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Fixture {
    pub week: Week,
    pub home: Team,
    pub away: Team,
}

impl Fixture {
    /// Orders the two teams so the lower index comes first
    pub fn new(week: Week, a: Team, b: Team) -> Self {
        Self {
            week,
            home: a.min(b),
            away: a.max(b),
        }
    }

    pub fn involves(&self, team: Team) -> bool {
        self.home == team || self.away == team
    }
}

/// Decodes a solved model into fixtures ordered by week, then home, then away.
///
/// Only the `i < j` direction is read, so each game yields exactly one row.
pub fn extract(model: &Model, solution: &Solution) -> Result<Vec<Fixture>> {
    if !solution.status.has_solution() {
        return Err(ScheduleError::InfeasibleModel {
            status: solution.status.to_string(),
        });
    }

    if solution.values.len() != model.num_variables() {
        return Err(ScheduleError::Configuration(format!(
            "solution has {} values, model has {} variables",
            solution.values.len(),
            model.num_variables()
        )));
    }

    let params = model.params();
    let mut fixtures = Vec::with_capacity(params.games_per_week() * params.num_weeks);
    for week in params.weeks() {
        for (i, j) in params.pairs() {
            if solution.values[model.var(i, j, week).index()] > SOLUTION_THRESHOLD {
                fixtures.push(Fixture {
                    week,
                    home: i,
                    away: j,
                });
            }
        }
    }

    log::info!("decoded {} fixtures", fixtures.len());
    Ok(fixtures)
}

/// Decoded season with lookup helpers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    fixtures: Vec<Fixture>,
}

impl Schedule {
    /// Sorts into week/home/away order and normalises `home < away`
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        let mut fixtures: Vec<Fixture> = fixtures
            .into_iter()
            .map(|f| Fixture::new(f.week, f.home, f.away))
            .collect();
        fixtures.sort_unstable();
        Self { fixtures }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn fixtures_in_week(&self, week: Week) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.week == week)
    }

    pub fn games_for_team(&self, team: Team) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.involves(team))
    }

    /// Weeks in which `a` and `b` meet, ascending
    pub fn meetings(&self, a: Team, b: Team) -> Vec<Week> {
        self.fixtures
            .iter()
            .filter(|f| f.involves(a) && f.involves(b) && a != b)
            .map(|f| f.week)
            .collect()
    }

    /// Directional 0/1 assignment for `model`, setting both x[i][j][w] and x[j][i][w]
    /// for every fixture. Fixtures outside the model's team/week range and games
    /// listed more than once are rejected.
    pub fn assignment(&self, model: &Model) -> Result<Vec<f64>> {
        // sorted, so repeats are adjacent
        if let Some(pair) = self.fixtures.windows(2).find(|pair| pair[0] == pair[1]) {
            let f = pair[0];
            return Err(ScheduleError::Configuration(format!(
                "fixture (week {}, {} vs {}) is listed more than once",
                f.week, f.home, f.away
            )));
        }

        let params = model.params();
        let mut values = vec![0.0; model.num_variables()];
        for f in &self.fixtures {
            if f.away >= params.num_teams || f.week >= params.num_weeks {
                return Err(ScheduleError::Configuration(format!(
                    "fixture (week {}, {} vs {}) is outside a league of {} teams and {} weeks",
                    f.week, f.home, f.away, params.num_teams, params.num_weeks
                )));
            }
            values[model.var(f.home, f.away, f.week).index()] = 1.0;
            values[model.var(f.away, f.home, f.week).index()] = 1.0;
        }
        Ok(values)
    }
}

impl From<Vec<Fixture>> for Schedule {
    fn from(fixtures: Vec<Fixture>) -> Self {
        Schedule::new(fixtures)
    }
}
