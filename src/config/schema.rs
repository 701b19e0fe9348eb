use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::judge::Judge;
use crate::scoring::MetricConfig;

/// Delay between analysis animation stages when none is configured.
pub const DEFAULT_STAGE_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Contents of `~/.config/adams/config.yaml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// LLM judge preselected in the dashboard
    #[serde(default)]
    pub judge: Judge,

    /// Delay per analysis stage, humantime syntax ("800ms", "1s")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_delay: Option<String>,

    /// Directory export files are written to (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,

    #[serde(default)]
    pub theme: ThemeMode,

    /// Metric set; the built-in defaults are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricConfig>>,
}

impl Config {
    /// Configured stage delay, or the default when unset or unparseable.
    /// Unparseable values are reported by `validate_config`.
    pub fn stage_delay(&self) -> Duration {
        self.stage_delay
            .as_deref()
            .and_then(|s| humantime::parse_duration(s.trim()).ok())
            .unwrap_or(DEFAULT_STAGE_DELAY)
    }

    /// Export directory with a leading `~` expanded.
    pub fn export_dir(&self) -> PathBuf {
        match self.export_dir.as_deref() {
            Some(dir) => expand_home(dir),
            None => PathBuf::from("."),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.judge, Judge::Qwen);
        assert_eq!(config.theme, ThemeMode::Auto);
        assert!(config.metrics.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
judge: Mistral
stage_delay: 250ms
export_dir: /tmp/adams
theme: light
metrics:
  - name: Clarity
    score: 9.0
    weight: 0.7
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.judge, Judge::Mistral);
        assert_eq!(config.stage_delay(), Duration::from_millis(250));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/adams"));
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.metrics.unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "queries: []\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_stage_delay_default() {
        let config = Config {
            stage_delay: Some("soon".to_string()),
            ..Config::default()
        };
        assert_eq!(config.stage_delay(), DEFAULT_STAGE_DELAY);
        assert_eq!(Config::default().stage_delay(), DEFAULT_STAGE_DELAY);
    }

    #[test]
    fn test_export_dir_expands_home() {
        let config = Config {
            export_dir: Some("~/exports".to_string()),
            ..Config::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.export_dir(), home.join("exports"));
        }
        assert_eq!(Config::default().export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            judge: Judge::Deepseek,
            stage_delay: Some("1s".to_string()),
            export_dir: None,
            theme: ThemeMode::Dark,
            metrics: Some(crate::scoring::default_metric_configs()),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
