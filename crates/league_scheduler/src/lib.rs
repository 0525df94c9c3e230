pub mod config;
pub mod constants;
pub mod csv_reader;
pub mod error;
pub mod export;
pub mod extract;
pub mod league;
pub mod model;
pub mod oracle;
pub mod pipeline;

#[cfg(test)]
mod testdata;

pub use config::{Config, OutputFormat};
pub use csv_reader::read_schedule_csv;
pub use error::{Result, ScheduleError};
pub use export::export_schedule;
pub use extract::{Fixture, Schedule, extract};
pub use league::{Division, LeagueParams, Team, Week};
pub use model::{Model, build};
pub use oracle::{Backend, GoodLpOracle, Oracle, OracleOptions, SolveStats, SolveStatus, Solution};
pub use pipeline::{GeneratedSchedule, generate};
