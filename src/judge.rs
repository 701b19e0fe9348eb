use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// LLM judge shown in the dashboard and stamped on exports.
///
/// Selection is cosmetic: no model is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Judge {
    #[default]
    #[serde(rename = "Qwen")]
    Qwen,
    #[serde(rename = "Deepseek")]
    Deepseek,
    #[serde(rename = "Distilled Qwen")]
    DistilledQwen,
    #[serde(rename = "Mistral")]
    Mistral,
    #[serde(rename = "LLaMA 3.1")]
    Llama31,
}

impl Judge {
    pub const ALL: [Judge; 5] = [
        Judge::Qwen,
        Judge::Deepseek,
        Judge::DistilledQwen,
        Judge::Mistral,
        Judge::Llama31,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Judge::Qwen => "Qwen",
            Judge::Deepseek => "Deepseek",
            Judge::DistilledQwen => "Distilled Qwen",
            Judge::Mistral => "Mistral",
            Judge::Llama31 => "LLaMA 3.1",
        }
    }

    /// File-name form: lower case, spaces replaced by underscores.
    pub fn slug(&self) -> String {
        self.label().to_lowercase().replace(' ', "_")
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|j| j == self).unwrap_or(0)
    }

    pub fn next(&self) -> Judge {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Judge {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Judge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Judge {
    type Err = String;

    /// Accepts the label or the slug, case-insensitively ("LLaMA 3.1", "llama_3.1").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|j| j.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                let options: Vec<_> = Self::ALL.iter().map(|j| j.label()).collect();
                format!("unknown judge '{}' (expected one of: {})", s, options.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_qwen() {
        assert_eq!(Judge::default(), Judge::Qwen);
    }

    #[test]
    fn test_slug() {
        assert_eq!(Judge::DistilledQwen.slug(), "distilled_qwen");
        assert_eq!(Judge::Llama31.slug(), "llama_3.1");
    }

    #[test]
    fn test_parse_label_and_slug() {
        assert_eq!("LLaMA 3.1".parse::<Judge>(), Ok(Judge::Llama31));
        assert_eq!("llama_3.1".parse::<Judge>(), Ok(Judge::Llama31));
        assert_eq!("distilled-qwen".parse::<Judge>(), Ok(Judge::DistilledQwen));
        assert!("gpt".parse::<Judge>().is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Judge::Llama31.next(), Judge::Qwen);
        assert_eq!(Judge::Qwen.previous(), Judge::Llama31);
        assert_eq!(Judge::Qwen.next(), Judge::Deepseek);
    }

    #[test]
    fn test_serde_uses_labels() {
        let yaml = serde_saphyr::to_string(&Judge::DistilledQwen).unwrap();
        assert!(yaml.contains("Distilled Qwen"));
        let parsed: Judge = serde_saphyr::from_str("LLaMA 3.1").unwrap();
        assert_eq!(parsed, Judge::Llama31);
        assert_eq!(serde_json::to_string(&Judge::Mistral).unwrap(), "\"Mistral\"");
    }
}
