use crate::league::{Team, Week};

/// Index of a decision variable x[i][j][w] in the dense lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Dense `N x N x W` arena of directional "team i plays team j in week w" indicators.
///
/// Offset of `(i, j, w)` is `(i * N + j) * W + w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    num_teams: usize,
    num_weeks: usize,
}

impl Lattice {
    pub fn new(num_teams: usize, num_weeks: usize) -> Self {
        Self {
            num_teams,
            num_weeks,
        }
    }

    pub fn len(&self) -> usize {
        self.num_teams * self.num_teams * self.num_weeks
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    pub fn num_weeks(&self) -> usize {
        self.num_weeks
    }

    pub fn var(&self, i: Team, j: Team, week: Week) -> VarId {
        debug_assert!(i < self.num_teams && j < self.num_teams && week < self.num_weeks);
        VarId((i * self.num_teams + j) * self.num_weeks + week)
    }

    /// Inverse of [`Lattice::var`]
    pub fn triple(&self, id: VarId) -> (Team, Team, Week) {
        let week = id.0 % self.num_weeks;
        let pair = id.0 / self.num_weeks;
        (pair / self.num_teams, pair % self.num_teams, week)
    }

    /// Every `(i, j, week)` in offset order
    pub fn triples(&self) -> impl Iterator<Item = (Team, Team, Week)> + '_ {
        (0..self.len()).map(|offset| self.triple(VarId(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_dense_and_invertible() {
        let lattice = Lattice::new(10, 13);
        assert_eq!(lattice.len(), 1300);

        for (offset, (i, j, w)) in lattice.triples().enumerate() {
            let id = lattice.var(i, j, w);
            assert_eq!(id.index(), offset);
            assert_eq!(lattice.triple(id), (i, j, w));
        }
    }

    #[test]
    fn test_offset_formula() {
        let lattice = Lattice::new(4, 5);
        assert_eq!(lattice.var(0, 0, 0), VarId(0));
        assert_eq!(lattice.var(0, 0, 4), VarId(4));
        assert_eq!(lattice.var(0, 1, 0), VarId(5));
        assert_eq!(lattice.var(1, 0, 0), VarId(20));
        assert_eq!(lattice.var(3, 3, 4), VarId(79));
    }
}
