use crate::{
    constants::{TEAM1_HEADER, TEAM2_HEADER, WEEK_HEADER},
    error::{Result, ScheduleError},
    extract::{Fixture, Schedule},
};

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// Reads a `Week,Team1,Team2` schedule file
///
/// # Errors
/// Returns error if the file cannot be opened, the header does not match,
/// or a row is missing a column or holds a non-integer value
pub fn read_schedule_csv<P: AsRef<Path>>(path: P) -> Result<Schedule> {
    let file = std::fs::File::open(path)?;
    read_schedule_from_reader(file)
}

/// Reads a schedule from any reader. Blank rows are skipped and each fixture is
/// normalised so the lower team index comes first.
pub fn read_schedule_from_reader<R: Read>(reader: R) -> Result<Schedule> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    validate_csv_headers(&mut csv_reader)?;

    let mut fixtures = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        // header is row 1
        let row = idx + 2;
        if let Some(fixture) = parse_record(&record?, row)? {
            fixtures.push(fixture);
        }
    }

    Ok(Schedule::new(fixtures))
}

/// Validates CSV headers match expected format
fn validate_csv_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = csv_reader
        .headers()
        .map_err(|e| ScheduleError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    for (column, expected) in [WEEK_HEADER, TEAM1_HEADER, TEAM2_HEADER].iter().enumerate() {
        let found = headers.get(column).ok_or_else(|| {
            ScheduleError::CsvHeader(format!("Missing {} column at index {}", expected, column))
        })?;
        if !found.eq_ignore_ascii_case(expected) {
            return Err(ScheduleError::CsvHeader(format!(
                "Expected '{}' in column {}, found '{}'",
                expected, column, found
            )));
        }
    }

    Ok(())
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Option<Fixture>> {
    if rec.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    if rec.len() < 3 {
        return Err(ScheduleError::CsvRow {
            row,
            got: rec.len(),
        });
    }

    let week = parse_field(&rec[0], WEEK_HEADER, row)?;
    let team1 = parse_field(&rec[1], TEAM1_HEADER, row)?;
    let team2 = parse_field(&rec[2], TEAM2_HEADER, row)?;
    Ok(Some(Fixture::new(week, team1, team2)))
}

fn parse_field(value: &str, field: &'static str, row: usize) -> Result<usize> {
    value.parse().map_err(|source| ScheduleError::FieldParse {
        row,
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::export::export_schedule;
    use tempfile::TempDir;

    #[test]
    fn test_read_basic_schedule() {
        let data = "Week,Team1,Team2\n0,0,1\n0,3,2\n1, 0 ,2\n";
        let schedule = read_schedule_from_reader(data.as_bytes()).unwrap();
        assert_eq!(
            schedule.fixtures(),
            &[
                Fixture::new(0, 0, 1),
                Fixture::new(0, 2, 3),
                Fixture::new(1, 0, 2),
            ]
        );
    }

    #[test]
    fn test_header_is_case_insensitive() {
        let data = "week,TEAM1,team2\n2,4,5\n";
        let schedule = read_schedule_from_reader(data.as_bytes()).unwrap();
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_wrong_header() {
        let data = "Key,Count\nA,1\n";
        let err = read_schedule_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ScheduleError::CsvHeader(_)));
    }

    #[test]
    fn test_short_row_and_bad_number() {
        let err = read_schedule_from_reader("Week,Team1,Team2\n0,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScheduleError::CsvRow { row: 2, got: 2 }));

        let err =
            read_schedule_from_reader("Week,Team1,Team2\n0,1,2\nx,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::FieldParse { row: 3, field: "Week", .. }
        ));
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let data = "Week,Team1,Team2\n0,0,1\n,,\n1,0,2\n";
        let schedule = read_schedule_from_reader(data.as_bytes()).unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_read_back_exported_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schedule.csv");
        let fixtures = vec![Fixture::new(0, 1, 2), Fixture::new(3, 0, 5)];
        export_schedule(&fixtures, &path, OutputFormat::Csv).unwrap();

        let schedule = read_schedule_csv(&path).unwrap();
        assert_eq!(schedule.fixtures(), fixtures.as_slice());
    }

    #[test]
    fn test_nonexistent_file() {
        assert!(matches!(
            read_schedule_csv("nonexistent_schedule.csv"),
            Err(ScheduleError::Io(_))
        ));
    }
}
