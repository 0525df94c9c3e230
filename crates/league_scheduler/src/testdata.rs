//! Hand-checked schedules shared by unit tests.

use crate::{extract::Fixture, league::Team};

/// 8 teams (A = 0..4, B = 4..8), 10 weeks
pub const EIGHT_TEAMS: [[(Team, Team); 4]; 10] = [
    [(0, 4), (1, 2), (3, 6), (5, 7)],
    [(0, 2), (1, 4), (3, 5), (6, 7)],
    [(0, 7), (1, 6), (2, 3), (4, 5)],
    [(0, 3), (1, 5), (2, 7), (4, 6)],
    [(0, 5), (1, 3), (2, 6), (4, 7)],
    [(0, 1), (2, 4), (3, 7), (5, 6)],
    [(0, 6), (1, 7), (2, 5), (3, 4)],
    [(0, 3), (1, 2), (4, 6), (5, 7)],
    [(0, 2), (1, 3), (4, 5), (6, 7)],
    [(0, 1), (2, 3), (4, 7), (5, 6)],
];

/// 10 teams (A = 0..5, B = 5..10), 13 weeks; both late weeks hold 4 division games
pub const TEN_TEAMS: [[(Team, Team); 5]; 13] = [
    [(0, 2), (1, 7), (3, 6), (4, 8), (5, 9)],
    [(0, 4), (1, 8), (2, 3), (5, 7), (6, 9)],
    [(0, 8), (1, 2), (3, 4), (5, 6), (7, 9)],
    [(0, 9), (1, 3), (2, 7), (4, 6), (5, 8)],
    [(0, 7), (1, 4), (2, 5), (3, 9), (6, 8)],
    [(0, 3), (1, 6), (2, 8), (4, 9), (5, 7)],
    [(0, 4), (1, 2), (3, 5), (6, 9), (7, 8)],
    [(0, 2), (1, 3), (4, 5), (6, 7), (8, 9)],
    [(0, 1), (2, 4), (3, 8), (5, 6), (7, 9)],
    [(0, 3), (1, 9), (2, 6), (4, 7), (5, 8)],
    [(0, 6), (1, 5), (2, 9), (3, 4), (7, 8)],
    [(0, 5), (1, 4), (2, 3), (6, 7), (8, 9)],
    [(0, 1), (2, 4), (3, 7), (5, 9), (6, 8)],
];

pub fn fixtures<const G: usize>(weeks: &[[(Team, Team); G]]) -> Vec<Fixture> {
    weeks
        .iter()
        .enumerate()
        .flat_map(|(week, games)| games.iter().map(move |&(a, b)| Fixture::new(week, a, b)))
        .collect()
}
