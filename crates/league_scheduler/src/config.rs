use crate::{
    error::{Result, ScheduleError},
    league::LeagueParams,
    oracle::{Backend, OracleOptions},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

/// Top-level settings, usually read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub league: LeagueParams,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub time_limit_secs: Option<f64>,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Invalid output format: {}. Must be 'csv' or 'json'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("schedules")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Reads and validates a TOML config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScheduleError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ScheduleError::Configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.league.validate()?;

        if let Some(secs) = self.solver.time_limit_secs
            && !(secs.is_finite() && secs > 0.0)
        {
            return Err(ScheduleError::Configuration(format!(
                "time_limit_secs must be a positive number of seconds, got {}",
                secs
            )));
        }

        Ok(())
    }

    pub fn oracle_options(&self) -> OracleOptions {
        OracleOptions {
            backend: self.solver.backend,
            time_limit: self.solver.time_limit_secs.map(Duration::from_secs_f64),
            verbose: self.solver.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.league, LeagueParams::default());
        assert_eq!(config.output.dir, PathBuf::from("schedules"));
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[league]
num_teams = 8
division_split = 4
num_weeks = 10

[solver]
backend = "microlp"
time_limit_secs = 30.0
verbose = true

[output]
dir = "out"
format = "json"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.league, LeagueParams::new(8, 4, 10));
        assert_eq!(config.solver.backend, Backend::MicroLp);
        assert_eq!(config.output.format, OutputFormat::Json);

        let options = config.oracle_options();
        assert_eq!(options.time_limit, Some(Duration::from_secs(30)));
        assert!(options.verbose);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("[solver]\nverbose = false\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.league, LeagueParams::default());
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.solver.time_limit_secs, None);
    }

    #[test]
    fn test_inconsistent_league_is_rejected() {
        let file = write_config("[league]\nnum_teams = 10\ndivision_split = 5\nnum_weeks = 10\n");
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_bad_time_limit_and_backend() {
        let mut config = Config::default();
        config.solver.time_limit_secs = Some(-1.0);
        assert!(config.validate().is_err());

        let file = write_config("[solver]\nbackend = \"gurobi\"\n");
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let file = write_config("[league]\nnum_team = 8\ndivision_split = 4\nnum_weeks = 10\n");
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("num_team"), "{err}");

        let file = write_config("[solver]\ntime_limit = 5.0\n");
        assert!(Config::load_from_file(file.path()).is_err());

        let file = write_config("[outputs]\ndir = \"out\"\n");
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
