use crate::{
    error::Result,
    model::{LinearConstraint, Model, Sense, VarId},
    oracle::{Oracle, SolveStats, SolveStatus, Solution},
};
use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution as _, SolutionStatus,
    SolverModel, Variable, variable,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

/// MILP backends reachable through `good_lp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// COIN-OR CBC branch-and-cut (cargo feature `cbc`)
    Cbc,
    /// Pure-Rust simplex with branch-and-bound; fine for small leagues
    MicroLp,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "cbc") {
            Backend::Cbc
        } else {
            Backend::MicroLp
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Cbc => write!(f, "cbc"),
            Backend::MicroLp => write!(f, "microlp"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cbc" => Ok(Backend::Cbc),
            "microlp" => Ok(Backend::MicroLp),
            other => Err(format!(
                "Invalid solver backend: {}. Must be 'cbc' or 'microlp'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleOptions {
    pub backend: Backend,
    /// Wall-clock cap handed to the backend (CBC only)
    pub time_limit: Option<Duration>,
    /// Let the backend print its own search log
    pub verbose: bool,
}

/// [`Oracle`] backed by `good_lp`. Every decision variable is declared binary.
#[derive(Debug, Clone, Default)]
pub struct GoodLpOracle {
    options: OracleOptions,
}

impl GoodLpOracle {
    pub fn new(options: OracleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OracleOptions {
        &self.options
    }
}

impl Oracle for GoodLpOracle {
    fn solve(&self, model: &Model) -> Result<Solution> {
        let mut vars = ProblemVariables::new();
        let x_vars: Vec<Variable> = model
            .variables()
            .iter()
            .map(|v| vars.add(variable().binary().name(v.name())))
            .collect();

        let objective = match model.objective() {
            Some(obj) => linear_expression(&obj.terms, &x_vars),
            None => Expression::from(0.0),
        };
        let sense = model.objective().map_or(Sense::Minimize, |obj| obj.sense);

        let constraints: Vec<Constraint> = model
            .constraints()
            .iter()
            .flat_map(|c| to_good_lp_constraints(c, &x_vars))
            .collect();
        log::info!(
            "start solving with {}: {} variables, {} rows",
            self.options.backend,
            x_vars.len(),
            constraints.len()
        );

        let start = Instant::now();
        let run = match self.options.backend {
            Backend::Cbc => self.solve_cbc(vars, sense, objective, constraints, &x_vars, model)?,
            Backend::MicroLp => {
                if self.options.time_limit.is_some() {
                    log::warn!("microlp does not support a time limit; ignoring it");
                }
                let unsolved = match sense {
                    Sense::Maximize => vars.maximise(objective),
                    Sense::Minimize => vars.minimise(objective),
                };
                let problem = unsolved.using(good_lp::microlp);
                run_to_completion(problem, constraints, &x_vars, model, |_| None)
            }
        };
        let BackendRun {
            status,
            values,
            iterations,
        } = run;
        let stats = SolveStats {
            wall_time: start.elapsed(),
            iterations,
            nodes: None,
        };
        log::info!(
            "solver finished: status={}, wall time {} ms",
            status,
            stats.wall_time.as_millis()
        );

        if !status.has_solution() {
            return Ok(Solution::without_values(status, stats));
        }

        let objective = model.objective_value(&values);
        Ok(Solution {
            status,
            values,
            objective,
            stats,
        })
    }
}

impl GoodLpOracle {
    #[cfg(feature = "cbc")]
    fn solve_cbc(
        &self,
        vars: ProblemVariables,
        sense: Sense,
        objective: Expression,
        constraints: Vec<Constraint>,
        x_vars: &[Variable],
        model: &Model,
    ) -> Result<BackendRun> {
        let unsolved = match sense {
            Sense::Maximize => vars.maximise(objective),
            Sense::Minimize => vars.minimise(objective),
        };
        let mut problem = unsolved.using(good_lp::coin_cbc);
        if let Some(limit) = self.options.time_limit {
            problem.set_parameter("seconds", &limit.as_secs_f64().to_string());
        }
        if !self.options.verbose {
            problem.set_parameter("log", "0");
        }
        Ok(run_to_completion(
            problem,
            constraints,
            x_vars,
            model,
            |solution| u64::try_from(solution.model().iteration_count()).ok(),
        ))
    }

    #[cfg(not(feature = "cbc"))]
    fn solve_cbc(
        &self,
        _vars: ProblemVariables,
        _sense: Sense,
        _objective: Expression,
        _constraints: Vec<Constraint>,
        _x_vars: &[Variable],
        _model: &Model,
    ) -> Result<BackendRun> {
        Err(crate::error::ScheduleError::OracleUnavailable(
            "the cbc backend was not compiled in (enable the `cbc` feature)".to_string(),
        ))
    }
}

/// Outcome of one backend call. `values` is empty unless the status has a solution.
struct BackendRun {
    status: SolveStatus,
    values: Vec<f64>,
    iterations: Option<u64>,
}

impl BackendRun {
    fn failed(status: SolveStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
            iterations: None,
        }
    }
}

/// Adds the rows, solves, and reads back one value per variable
fn run_to_completion<P>(
    problem: P,
    constraints: Vec<Constraint>,
    x_vars: &[Variable],
    model: &Model,
    iterations: impl FnOnce(&P::Solution) -> Option<u64>,
) -> BackendRun
where
    P: SolverModel<Error = ResolutionError>,
{
    let problem = constraints.into_iter().fold(problem, |p, c| p.with(c));
    match problem.solve() {
        Ok(solution) => {
            let values: Vec<f64> = x_vars.iter().map(|&x| solution.value(x)).collect();
            let status = classify(solution.status(), model, &values);
            let iterations = iterations(&solution);
            BackendRun {
                values: if status.has_solution() { values } else { Vec::new() },
                status,
                iterations,
            }
        }
        Err(ResolutionError::Infeasible) => BackendRun::failed(SolveStatus::Infeasible),
        Err(ResolutionError::Unbounded) => BackendRun::failed(SolveStatus::Unbounded),
        Err(e) => BackendRun::failed(SolveStatus::Other(e.to_string())),
    }
}

/// A search stopped early only counts as feasible if its incumbent passes every row.
/// CBC hands back its column vector even when no incumbent was found.
fn classify(status: SolutionStatus, model: &Model, values: &[f64]) -> SolveStatus {
    let limit = match status {
        SolutionStatus::Optimal => return SolveStatus::Optimal,
        SolutionStatus::TimeLimit => "time limit",
        SolutionStatus::GapLimit => "gap limit",
    };

    match model.check(values) {
        Ok(violations) if violations.is_empty() => {
            log::warn!("{limit} reached; keeping the best schedule found so far");
            SolveStatus::Feasible
        }
        Ok(violations) => {
            log::warn!("{limit} reached; incumbent breaks {} constraints", violations.len());
            SolveStatus::Other(format!("{limit} reached without a feasible schedule"))
        }
        Err(e) => {
            log::warn!("{limit} reached; incumbent rejected: {e}");
            SolveStatus::Other(format!("{limit} reached without a feasible schedule"))
        }
    }
}

fn linear_expression(terms: &[(VarId, f64)], x_vars: &[Variable]) -> Expression {
    let mut expr = Expression::from(0.0);
    for &(var, coef) in terms {
        expr += coef * x_vars[var.index()];
    }
    expr
}

/// Equalities map to one row; ranges to up to two one-sided rows
fn to_good_lp_constraints(c: &LinearConstraint, x_vars: &[Variable]) -> Vec<Constraint> {
    let expr = linear_expression(&c.terms, x_vars);
    if c.is_equality() {
        return vec![expr.eq(c.upper)];
    }

    let mut rows = Vec::with_capacity(2);
    if c.lower.is_finite() {
        rows.push(expr.clone().geq(c.lower));
    }
    if c.upper.is_finite() {
        rows.push(expr.leq(c.upper));
    }
    rows
}
