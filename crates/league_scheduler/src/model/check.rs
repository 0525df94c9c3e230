use crate::{
    constants::CHECK_TOLERANCE,
    error::{Result, ScheduleError},
    model::{ConstraintKind, Model},
};
use std::fmt;

/// A constraint whose left-hand side falls outside its bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub constraint_id: usize,
    pub kind: ConstraintKind,
    pub lhs: f64,
    pub lower: f64,
    pub upper: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "constraint #{} ({}): {} not in [{}, {}]",
            self.constraint_id, self.kind, self.lhs, self.lower, self.upper
        )
    }
}

impl Model {
    /// Evaluates every constraint under `values` (indexed by `VarId`).
    ///
    /// Values are also required to be 0 or 1; a fractional entry is reported
    /// as a configuration error since it cannot come from a binary model.
    pub fn check(&self, values: &[f64]) -> Result<Vec<Violation>> {
        if values.len() != self.num_variables() {
            return Err(ScheduleError::Configuration(format!(
                "assignment has {} values, model has {} variables",
                values.len(),
                self.num_variables()
            )));
        }

        if let Some((idx, v)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| v.abs() > CHECK_TOLERANCE && (v - 1.0).abs() > CHECK_TOLERANCE)
        {
            return Err(ScheduleError::Configuration(format!(
                "{} = {} is not binary",
                self.variables()[idx].name(),
                v
            )));
        }

        let violations = self
            .constraints()
            .iter()
            .enumerate()
            .filter_map(|(constraint_id, c)| {
                let lhs = c.lhs(values);
                if lhs < c.lower - CHECK_TOLERANCE || lhs > c.upper + CHECK_TOLERANCE {
                    Some(Violation {
                        constraint_id,
                        kind: c.kind,
                        lhs,
                        lower: c.lower,
                        upper: c.upper,
                    })
                } else {
                    None
                }
            })
            .collect();

        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use crate::league::LeagueParams;
    use crate::model::{ConstraintKind, build};

    #[test]
    fn test_all_zero_assignment_violates_load_and_totals() {
        let model = build(&LeagueParams::new(4, 2, 4)).unwrap();
        let values = vec![0.0; model.num_variables()];
        let violations = model.check(&values).unwrap();

        assert!(violations.iter().all(|v| matches!(
            v.kind,
            ConstraintKind::WeeklyLoad
                | ConstraintKind::IntraDivision
                | ConstraintKind::InterDivision
        )));
        // every weekly load (16) and every pair total (6)
        assert_eq!(violations.len(), 16 + 6);
    }

    #[test]
    fn test_one_directional_game_breaks_symmetry() {
        let model = build(&LeagueParams::new(4, 2, 4)).unwrap();
        let mut values = vec![0.0; model.num_variables()];
        values[model.var(0, 1, 0).index()] = 1.0;

        let violations = model.check(&values).unwrap();
        let symmetry: Vec<_> = violations
            .iter()
            .filter(|v| v.kind == ConstraintKind::Symmetry)
            .collect();
        assert_eq!(symmetry.len(), 1);
        assert_eq!(symmetry[0].lhs, 1.0);
    }

    #[test]
    fn test_self_play_is_reported() {
        let model = build(&LeagueParams::new(4, 2, 4)).unwrap();
        let mut values = vec![0.0; model.num_variables()];
        values[model.var(2, 2, 3).index()] = 1.0;

        let violations = model.check(&values).unwrap();
        assert!(violations.iter().any(|v| v.kind == ConstraintKind::NoSelfPlay));
    }

    #[test]
    fn test_rejects_wrong_length_and_fractional_values() {
        let model = build(&LeagueParams::new(4, 2, 4)).unwrap();
        assert!(model.check(&[0.0; 3]).is_err());

        let mut values = vec![0.0; model.num_variables()];
        values[5] = 0.5;
        let err = model.check(&values).unwrap_err();
        assert!(err.to_string().contains("not binary"));
    }
}
