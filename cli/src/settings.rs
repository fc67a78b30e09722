use clap::ArgMatches;
use config::ConfigError;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Logging {
    pub debug: bool,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    pub directory: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct Random {
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Simulation {
    pub runs: usize,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: Logging,
    pub output: Output,
    #[serde(default)]
    pub random: Random,
    pub simulation: Simulation,
}

impl Settings {
    pub fn with_file(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        // Use the included default configuration
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            include_str!("default-settings.toml"),
            config::FileFormat::Toml,
        ));

        if let Some(config_file) = config_file {
            builder =
                builder.add_source(config::File::from(config_file).format(config::FileFormat::Toml));
        }
        builder.build()?.try_deserialize()
    }

    /// Load the settings file given by `--config` and apply the other
    /// command line options on top of it.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let mut settings = Settings::with_file(matches.value_of_os("config").map(Path::new))?;
        if matches.is_present("debug") {
            settings.logging.debug = true;
        }
        if let Some(dir) = matches.value_of_os("output-dir") {
            settings.output.directory = PathBuf::from(dir);
        }
        if let Some(seed) = matches.value_of("seed") {
            let seed = seed.trim().parse::<u64>().map_err(|e| {
                ConfigError::Message(format!("invalid seed {:?}: {}", seed, e))
            })?;
            settings.random.seed = Some(seed);
        }
        if let Some(runs) = matches.value_of("simulations") {
            settings.simulation.runs = runs.trim().parse::<usize>().map_err(|e| {
                ConfigError::Message(format!("invalid number of simulations {:?}: {}", runs, e))
            })?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::with_common_args;
    use clap::{App, Arg};
    use pretty_assertions::assert_eq;

    fn test_app() -> App<'static, 'static> {
        with_common_args(App::new("test"))
            .arg(Arg::with_name("seed").long("seed").takes_value(true))
            .arg(
                Arg::with_name("simulations")
                    .long("simulations")
                    .takes_value(true),
            )
    }

    #[test]
    fn default_settings() {
        let settings = Settings::with_file(None).unwrap();
        assert_eq!(false, settings.logging.debug);
        assert_eq!(PathBuf::from("."), settings.output.directory);
        assert_eq!(None, settings.random.seed);
        assert_eq!(1000, settings.simulation.runs);
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config_file = tmp.path().join("graphprep.toml");
        std::fs::write(
            &config_file,
            "[output]\ndirectory = \"/data/inf\"\n\n[random]\nseed = 17\n",
        )
        .unwrap();

        let settings = Settings::with_file(Some(config_file.as_path())).unwrap();
        assert_eq!(false, settings.logging.debug);
        assert_eq!(PathBuf::from("/data/inf"), settings.output.directory);
        assert_eq!(Some(17), settings.random.seed);
        assert_eq!(1000, settings.simulation.runs);
    }

    #[test]
    fn command_line_overrides_settings() {
        let matches = test_app().get_matches_from(vec![
            "test", "-d", "--output-dir", "results", "--seed", "3",
        ]);
        let settings = Settings::from_matches(&matches).unwrap();
        assert_eq!(true, settings.logging.debug);
        assert_eq!(PathBuf::from("results"), settings.output.directory);
        assert_eq!(Some(3), settings.random.seed);
    }

    #[test]
    fn simulation_runs_from_command_line() {
        let matches = test_app().get_matches_from(vec!["test", "--simulations", "250"]);
        let settings = Settings::from_matches(&matches).unwrap();
        assert_eq!(250, settings.simulation.runs);

        let matches = test_app().get_matches_from(vec!["test", "--simulations", "many"]);
        assert!(Settings::from_matches(&matches).is_err());
    }

    #[test]
    fn invalid_seed() {
        let matches = test_app().get_matches_from(vec!["test", "--seed", "abc"]);
        assert!(Settings::from_matches(&matches).is_err());
    }

    #[test]
    fn missing_settings_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Settings::with_file(Some(tmp.path().join("missing.toml").as_path())).is_err());
    }
}
