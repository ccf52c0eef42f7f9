use std::fs::File;
use std::io::BufReader;

use log::LevelFilter;
use serde::Deserialize;

use crate::integration::integrator::Integrator;
use crate::integration::integratormanager::IntegratorManager;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;

pub const DEFAULT_SEPARATOR: &str = "===================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    grouping: bool,
    separator: String
}

impl Default for ShellSettings {
    fn default() -> Self {
        ShellSettings { grouping: true, separator: DEFAULT_SEPARATOR.to_owned() }
    }
}

impl ShellSettings {
    pub fn new(grouping: bool, separator: String) -> ShellSettings {
        ShellSettings { grouping, separator }
    }

    pub fn grouping(&self) -> bool {
        self.grouping
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    level: LogLevel
}

impl LoggingSettings {
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ConfigurationJsonProp {
    shell: ShellSettings,
    logging: LoggingSettings,
    presets: Vec<serde_json::Value>
}

pub struct Configuration {
    shell: ShellSettings,
    logging: LoggingSettings,
    integrator_manager: Manager<Integrator>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            shell: ShellSettings::default(),
            logging: LoggingSettings::default(),
            integrator_manager: IntegratorManager::new()
        }
    }

    pub fn shell(&self) -> &ShellSettings {
        &self.shell
    }

    pub fn logging(&self) -> &LoggingSettings {
        &self.logging
    }

    pub fn integrator_manager(&self) -> &Manager<Integrator> {
        &self.integrator_manager
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let configuration = Configuration {
            shell: json_prop.shell,
            logging: json_prop.logging,
            integrator_manager: IntegratorManager::new()
        };
        configuration.integrator_manager.insert_obj_from_json_vec(&json_prop.presets)?;
        Ok(configuration)
    }

    pub fn from_json_str(json_str: &str) -> Result<Configuration, ManagerError> {
        let json_value: serde_json::Value = serde_json::from_str(json_str)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json_value(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let configuration = Configuration::from_json_str("{}").unwrap();
        assert_eq!(configuration.shell(), &ShellSettings::default());
        assert_eq!(configuration.logging().level(), LogLevel::Warn);
        assert!(configuration.integrator_manager().is_empty());
    }

    #[test]
    fn reads_every_section() {
        let configuration = Configuration::from_json_str(
            r#"{
                "shell": {"grouping": false, "separator": "----"},
                "logging": {"level": "debug"},
                "presets": [
                    {"name": "square_left", "sum_type": "l", "num_steps": 4, "function": 1}
                ]
            }"#
        )
        .unwrap();
        assert!(!configuration.shell().grouping());
        assert_eq!(configuration.shell().separator(), "----");
        assert_eq!(LevelFilter::from(configuration.logging().level()), LevelFilter::Debug);
        let integrator = configuration.integrator_manager().get("square_left").unwrap();
        assert_eq!(integrator.calculate(0.0, 2.0).unwrap(), 1.75);
    }

    #[test]
    fn partial_shell_section_keeps_other_defaults() {
        let configuration = Configuration::from_json_str(r#"{"shell": {"grouping": false}}"#).unwrap();
        assert_eq!(configuration.shell().separator(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn unknown_log_level_is_a_parse_error() {
        let result = Configuration::from_json_str(r#"{"logging": {"level": "loud"}}"#);
        assert!(matches!(result, Err(ManagerError::JsonParse(_))));
    }

    #[test]
    fn invalid_preset_fails_the_whole_configuration() {
        let result = Configuration::from_json_str(
            r#"{"presets": [{"name": "bad", "sum_type": "x", "num_steps": 4, "function": 1}]}"#
        );
        assert!(matches!(result, Err(ManagerError::Integration(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Configuration::from_reader("/nonexistent/riemann/config.json");
        assert!(matches!(result, Err(ManagerError::Io(_))));
    }
}
