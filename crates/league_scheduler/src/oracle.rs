//! Seam between the model and the MILP solver.

pub mod good_lp_backend;

pub use good_lp_backend::{Backend, GoodLpOracle, OracleOptions};

use crate::{error::Result, model::Model};
use std::{fmt, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unbounded,
    Other(String),
}

impl SolveStatus {
    /// True when the values describe an assignment that satisfies every constraint
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Feasible => write!(f, "feasible"),
            SolveStatus::Infeasible => write!(f, "infeasible"),
            SolveStatus::Unbounded => write!(f, "unbounded"),
            SolveStatus::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Solver diagnostics; counters are `None` when the backend does not report them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveStats {
    pub wall_time: Duration,
    pub iterations: Option<u64>,
    pub nodes: Option<u64>,
}

/// Oracle output. `values` is indexed by `VarId` and is empty unless
/// [`SolveStatus::has_solution`] holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub status: SolveStatus,
    pub values: Vec<f64>,
    pub objective: Option<f64>,
    pub stats: SolveStats,
}

impl Solution {
    /// Solution without values (infeasible, unbounded, aborted)
    pub fn without_values(status: SolveStatus, stats: SolveStats) -> Self {
        Self {
            status,
            values: Vec::new(),
            objective: None,
            stats,
        }
    }
}

/// An integer-programming solver that can take a [`Model`] as a black box
pub trait Oracle {
    fn solve(&self, model: &Model) -> Result<Solution>;
}
