/// Default league (10 teams split 5/5, 13 weeks)
pub const DEFAULT_NUM_TEAMS: usize = 10;
pub const DEFAULT_DIVISION_SPLIT: usize = 5;
pub const DEFAULT_NUM_WEEKS: usize = 13;

/// Games per opponent
pub const INTRA_DIVISION_GAMES: usize = 2; // own division: home and away
pub const INTER_DIVISION_GAMES: usize = 1; // other division: once

/// One physical game sets both x[i][j][w] and x[j][i][w]
pub const DIRECTIONS_PER_GAME: usize = 2;

/// Length of the sliding window in which a pairing may occur at most once
pub const REMATCH_WINDOW: usize = 4;

/// Trailing weeks whose intra-division games the objective rewards
pub const LATE_SEASON_WEEKS: usize = 2;

/// Values above this are read as 1 when decoding a solution
pub const SOLUTION_THRESHOLD: f64 = 0.5;

/// Slack used when evaluating constraint bounds against solver output
pub const CHECK_TOLERANCE: f64 = 1e-6;

/// Expected headers in schedule CSV files
pub const WEEK_HEADER: &str = "Week";
pub const TEAM1_HEADER: &str = "Team1";
pub const TEAM2_HEADER: &str = "Team2";
