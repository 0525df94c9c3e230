//! Linear model over directional game indicators.
//!
//! `x[i][j][w] = 1` iff team `i` plays team `j` in week `w`. One physical game
//! sets both `x[i][j][w]` and `x[j][i][w]`, so every per-team or per-pair sum
//! counts each game twice.

pub mod builder;
pub mod check;
pub mod lattice;

pub use builder::build;
pub use check::Violation;
pub use lattice::{Lattice, VarId};

use crate::league::{LeagueParams, Team, Week};
use std::fmt;

/// Binary decision variable x[team_i][team_j][week]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionVariable {
    pub team_i: Team,
    pub team_j: Team,
    pub week: Week,
}

impl DecisionVariable {
    pub fn name(&self) -> String {
        format!("x[{}][{}][{}]", self.team_i, self.team_j, self.week)
    }
}

/// Constraint groups, in the order they are added to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    NoSelfPlay,
    WeeklyLoad,
    Symmetry,
    IntraDivision,
    InterDivision,
    NoRematch,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 6] = [
        ConstraintKind::NoSelfPlay,
        ConstraintKind::WeeklyLoad,
        ConstraintKind::Symmetry,
        ConstraintKind::IntraDivision,
        ConstraintKind::InterDivision,
        ConstraintKind::NoRematch,
    ];
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConstraintKind::*;
        match self {
            NoSelfPlay => write!(f, "no-self-play"),
            WeeklyLoad => write!(f, "weekly-load"),
            Symmetry => write!(f, "symmetry"),
            IntraDivision => write!(f, "intra-division"),
            InterDivision => write!(f, "inter-division"),
            NoRematch => write!(f, "no-rematch"),
        }
    }
}

/// `lower <= Σ coef * x <= upper`; equal bounds encode an equality
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub kind: ConstraintKind,
    pub terms: Vec<(VarId, f64)>,
    pub lower: f64,
    pub upper: f64,
}

impl LinearConstraint {
    pub fn equal(kind: ConstraintKind, terms: Vec<(VarId, f64)>, rhs: f64) -> Self {
        Self {
            kind,
            terms,
            lower: rhs,
            upper: rhs,
        }
    }

    pub fn range(kind: ConstraintKind, terms: Vec<(VarId, f64)>, lower: f64, upper: f64) -> Self {
        Self {
            kind,
            terms,
            lower,
            upper,
        }
    }

    pub fn is_equality(&self) -> bool {
        self.lower == self.upper
    }

    /// Left-hand side under an assignment indexed by [`VarId`]
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub sense: Sense,
    pub terms: Vec<(VarId, f64)>,
}

impl Objective {
    pub fn value(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum()
    }
}

/// Complete model for one league. Built once by [`build`], read by the oracle
/// and the extractor; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Model {
    params: LeagueParams,
    lattice: Lattice,
    variables: Vec<DecisionVariable>,
    constraints: Vec<LinearConstraint>,
    objective: Option<Objective>,
}

impl Model {
    pub fn params(&self) -> &LeagueParams {
        &self.params
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Variables in [`VarId`] order
    pub fn variables(&self) -> &[DecisionVariable] {
        &self.variables
    }

    pub fn var(&self, i: Team, j: Team, week: Week) -> VarId {
        self.lattice.var(i, j, week)
    }

    /// Constraints in insertion order; the position is the constraint id
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn constraints_of(&self, kind: ConstraintKind) -> impl Iterator<Item = &LinearConstraint> {
        self.constraints.iter().filter(move |c| c.kind == kind)
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    pub fn objective_value(&self, values: &[f64]) -> Option<f64> {
        self.objective.as_ref().map(|obj| obj.value(values))
    }
}
