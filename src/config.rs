use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Environment variable for the delay between generations, in milliseconds
pub const TICK_VAR: &str = "TERMLIFE_TICK_MS";

/// Environment variable for the live cell probability used by randomize
pub const DENSITY_VAR: &str = "TERMLIFE_DENSITY";

/// Environment variable for the snapshot path
pub const DUMP_VAR: &str = "TERMLIFE_DUMP";

/// Environment variable for a fixed random seed
pub const SEED_VAR: &str = "TERMLIFE_SEED";

/// Environment variable for a file that receives the logs instead of stderr
pub const LOG_VAR: &str = "TERMLIFE_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got \"{value}\"")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be a number between 0 and 1, got \"{value}\"")]
    InvalidDensity { var: &'static str, value: String },
}

/// Runtime settings. The defaults mirror the classic simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Delay before each generation
    pub tick: Duration,

    /// Probability of a cell being alive after randomize
    pub density: f64,

    /// Where snapshots are written
    pub dump_path: PathBuf,

    /// Seed for the random source. Taken from the clock when unset.
    pub seed: Option<u64>,

    /// Log destination. Stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            density: 1.0 / 8.0,
            dump_path: PathBuf::from("dump.txt"),
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by whichever `TERMLIFE_*` variables are set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TICK_VAR) {
            config.tick = Duration::from_millis(parse_u64(TICK_VAR, value)?);
        }

        if let Some(value) = lookup(DENSITY_VAR) {
            config.density = parse_density(value)?;
        }

        if let Some(value) = lookup(DUMP_VAR) {
            config.dump_path = PathBuf::from(value);
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_u64(SEED_VAR, value)?);
        }

        if let Some(value) = lookup(LOG_VAR) {
            config.log_file = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

fn parse_u64(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber { var, value })
}

fn parse_density(value: String) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(density) if (0.0..=1.0).contains(&density) => Ok(density),
        _ => Err(ConfigError::InvalidDensity {
            var: DENSITY_VAR,
            value,
        }),
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    use super::Config;
    use super::ConfigError;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|&(k, v)| (k, v.to_string())).collect();

        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.tick, Duration::from_millis(100));
        assert_eq!(config.density, 0.125);
        assert_eq!(config.dump_path, PathBuf::from("dump.txt"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TERMLIFE_TICK_MS", "250"),
            ("TERMLIFE_DENSITY", "0.5"),
            ("TERMLIFE_DUMP", "/tmp/life.txt"),
            ("TERMLIFE_SEED", " 42 "),
            ("TERMLIFE_LOG", "life.log"),
        ]))
        .unwrap();

        assert_eq!(config.tick, Duration::from_millis(250));
        assert_eq!(config.density, 0.5);
        assert_eq!(config.dump_path, PathBuf::from("/tmp/life.txt"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, Some(PathBuf::from("life.log")));
    }

    #[test]
    fn bad_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("TERMLIFE_SEED", "abc")])),
            Err(ConfigError::NotANumber {
                var: "TERMLIFE_SEED",
                value: "abc".to_string()
            })
        );

        assert!(matches!(
            Config::from_lookup(lookup(&[("TERMLIFE_DENSITY", "1.5")])),
            Err(ConfigError::InvalidDensity { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("TERMLIFE_DENSITY", "NaN")])),
            Err(ConfigError::InvalidDensity { .. })
        ));
    }
}
