use crate::{
    constants::{
        DEFAULT_DIVISION_SPLIT, DEFAULT_NUM_TEAMS, DEFAULT_NUM_WEEKS, INTER_DIVISION_GAMES,
        INTRA_DIVISION_GAMES, REMATCH_WINDOW,
    },
    error::{Result, ScheduleError},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team identifier in `[0, num_teams)`
pub type Team = usize;

/// Week identifier in `[0, num_weeks)`
pub type Week = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    A,
    B,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::A => write!(f, "A"),
            Division::B => write!(f, "B"),
        }
    }
}

/// League shape. Teams below `division_split` form division A, the rest division B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeagueParams {
    pub num_teams: usize,
    pub division_split: usize,
    pub num_weeks: usize,
}

impl Default for LeagueParams {
    fn default() -> Self {
        Self {
            num_teams: DEFAULT_NUM_TEAMS,
            division_split: DEFAULT_DIVISION_SPLIT,
            num_weeks: DEFAULT_NUM_WEEKS,
        }
    }
}

impl LeagueParams {
    pub fn new(num_teams: usize, division_split: usize, num_weeks: usize) -> Self {
        Self {
            num_teams,
            division_split,
            num_weeks,
        }
    }

    /// Checks that every team can play exactly one game per week given the
    /// fixed game counts (2 per division rival, 1 per other-division opponent).
    pub fn validate(&self) -> Result<()> {
        if self.num_teams < 2 {
            return Err(ScheduleError::Configuration(format!(
                "num_teams must be at least 2, got {}",
                self.num_teams
            )));
        }

        if self.num_teams % 2 != 0 {
            return Err(ScheduleError::Configuration(format!(
                "num_teams must be even so every team plays each week, got {}",
                self.num_teams
            )));
        }

        if self.division_split == 0 || self.division_split >= self.num_teams {
            return Err(ScheduleError::Configuration(format!(
                "division_split must satisfy 0 < split < num_teams ({}), got {}",
                self.num_teams, self.division_split
            )));
        }

        if self.num_weeks < REMATCH_WINDOW {
            return Err(ScheduleError::Configuration(format!(
                "num_weeks must be at least {} (rematch window), got {}",
                REMATCH_WINDOW, self.num_weeks
            )));
        }

        for division in [Division::A, Division::B] {
            let own = self.division_size(division);
            let other = self.num_teams - own;
            let games = (own - 1) * INTRA_DIVISION_GAMES + other * INTER_DIVISION_GAMES;
            if games != self.num_weeks {
                return Err(ScheduleError::Configuration(format!(
                    "division {}: ({} - 1) * {} + {} * {} = {} games per team, but num_weeks = {}",
                    division,
                    own,
                    INTRA_DIVISION_GAMES,
                    other,
                    INTER_DIVISION_GAMES,
                    games,
                    self.num_weeks
                )));
            }
        }

        Ok(())
    }

    pub fn division_of(&self, team: Team) -> Division {
        if team < self.division_split {
            Division::A
        } else {
            Division::B
        }
    }

    pub fn division_size(&self, division: Division) -> usize {
        match division {
            Division::A => self.division_split,
            Division::B => self.num_teams - self.division_split,
        }
    }

    pub fn same_division(&self, i: Team, j: Team) -> bool {
        self.division_of(i) == self.division_of(j)
    }

    /// Physical meetings required between two distinct teams over the season
    pub fn games_between(&self, i: Team, j: Team) -> usize {
        if self.same_division(i, j) {
            INTRA_DIVISION_GAMES
        } else {
            INTER_DIVISION_GAMES
        }
    }

    /// Games played by each team over the season (equal to `num_weeks` once validated)
    pub fn games_per_team(&self, team: Team) -> usize {
        (0..self.num_teams)
            .filter(|&other| other != team)
            .map(|other| self.games_between(team, other))
            .sum()
    }

    pub fn teams(&self) -> std::ops::Range<Team> {
        0..self.num_teams
    }

    pub fn weeks(&self) -> std::ops::Range<Week> {
        0..self.num_weeks
    }

    /// Unordered pairs `(i, j)` with `i < j`, in ascending order
    pub fn pairs(&self) -> impl Iterator<Item = (Team, Team)> {
        (0..self.num_teams).tuple_combinations()
    }

    /// Games per week when every team plays
    pub fn games_per_week(&self) -> usize {
        self.num_teams / 2
    }
}
