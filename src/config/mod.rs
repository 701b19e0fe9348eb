pub mod init;
mod schema;

pub use schema::{Config, ThemeMode, DEFAULT_STAGE_DELAY};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::{build_configuration, default_metrics, validate_metrics, Configuration};

/// Get the config directory path (~/.config/adams/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("adams")
}

/// Get the default config file path (~/.config/adams/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/adams/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error: the built-in defaults are used.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        crate::verbose_eprintln!(
            "No config at {}, using built-in defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

/// Validate a loaded configuration.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref delay) = config.stage_delay {
        if let Err(e) = humantime::parse_duration(delay.trim()) {
            errors.push(format!("stage_delay: invalid duration '{}' - {}", delay, e));
        }
    }

    if let Some(ref metrics) = config.metrics {
        if let Err(metric_errors) = validate_metrics(metrics) {
            errors.extend(metric_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The metric defaults this config describes: its own list, or the built-in set.
pub fn effective_defaults(config: &Config) -> Result<Configuration> {
    match config.metrics {
        Some(ref metrics) => {
            build_configuration(metrics).context("Invalid metrics in config")
        }
        None => Ok(default_metrics()),
    }
}

/// Write a config file as YAML, creating parent directories as needed.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, &yaml)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::Judge;
    use crate::scoring::MetricConfig;
    use std::env;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = env::temp_dir().join("adams_test_missing_config.yaml");
        let _ = fs::remove_file(&path);
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = env::temp_dir()
            .join("adams_test_config_dir")
            .join("config.yaml");
        let _ = fs::remove_file(&path);

        let config = Config {
            judge: Judge::Llama31,
            stage_delay: Some("100ms".to_string()),
            ..Config::default()
        };
        save_config(&path, &config).unwrap();

        let loaded = load_config(Some(path.clone())).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = env::temp_dir().join("adams_test_bad_config.yaml");
        fs::write(&path, "judge: [unclosed").unwrap();
        assert!(load_config(Some(path.clone())).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            stage_delay: Some("whenever".to_string()),
            metrics: Some(vec![MetricConfig {
                name: "Clarity".to_string(),
                score: 12.0,
                weight: 0.5,
            }]),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("stage_delay"));
        assert!(errors[1].starts_with("metrics[0].score"));
    }

    #[test]
    fn test_effective_defaults() {
        assert_eq!(effective_defaults(&Config::default()).unwrap().len(), 15);

        let config = Config {
            metrics: Some(vec![MetricConfig {
                name: "Clarity".to_string(),
                score: 9.0,
                weight: 0.7,
            }]),
            ..Config::default()
        };
        let defaults = effective_defaults(&config).unwrap();
        assert_eq!(defaults.len(), 1);
        assert!(defaults.contains("Clarity"));
    }
}
