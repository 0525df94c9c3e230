use crate::{
    config::OutputFormat,
    constants::{TEAM1_HEADER, TEAM2_HEADER, WEEK_HEADER},
    error::{Result, ScheduleError},
    extract::Fixture,
};
use chrono::Local;
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Row of the exported table; JSON keys match the CSV columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub week: usize,
    pub team1: usize,
    pub team2: usize,
}

impl From<&Fixture> for ScheduleRow {
    fn from(f: &Fixture) -> Self {
        Self {
            week: f.week,
            team1: f.home,
            team2: f.away,
        }
    }
}

/// `<dir>/schedule_<timestamp>.<ext>`
pub fn default_output_path(dir: &Path, format: OutputFormat) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("schedule_{timestamp}.{}", format.extension()))
}

/// Writes `Week,Team1,Team2` followed by one row per fixture, in the given order
pub fn write_schedule_csv<W: Write>(fixtures: &[Fixture], writer: W) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);
    wtr.write_record([WEEK_HEADER, TEAM1_HEADER, TEAM2_HEADER])?;
    for f in fixtures {
        let week = f.week.to_string();
        let home = f.home.to_string();
        let away = f.away.to_string();
        wtr.write_record([week.as_str(), home.as_str(), away.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_schedule_json<W: Write>(fixtures: &[Fixture], writer: W) -> Result<()> {
    let rows: Vec<ScheduleRow> = fixtures.iter().map(ScheduleRow::from).collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Writes the schedule to `path`, creating the parent directory if needed
pub fn export_schedule(fixtures: &[Fixture], path: &Path, format: OutputFormat) -> Result<PathBuf> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| ScheduleError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| ScheduleError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => write_schedule_csv(fixtures, &mut writer)?,
        OutputFormat::Json => write_schedule_json(fixtures, &mut writer)?,
    }
    writer.flush()?;

    log::debug!("wrote {} fixtures to {}", fixtures.len(), path.display());
    Ok(path.to_path_buf())
}
