use super::engine::top_k;
use super::metric::Configuration;

/// Average top-3 weight above this is a high-confidence configuration.
pub const HIGH_IMPACT_THRESHOLD: f64 = 0.8;
/// Average top-3 weight above this (and not above HIGH) is balanced.
pub const MODERATE_IMPACT_THRESHOLD: f64 = 0.6;

const EMPHASIS_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTier {
    High,
    Moderate,
    Low,
}

impl ImpactTier {
    /// Thresholds are strict: exactly 0.8 is Moderate, exactly 0.6 is Low.
    pub fn from_average(average_weight: f64) -> Self {
        if average_weight > HIGH_IMPACT_THRESHOLD {
            ImpactTier::High
        } else if average_weight > MODERATE_IMPACT_THRESHOLD {
            ImpactTier::Moderate
        } else {
            ImpactTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactTier::High => "high",
            ImpactTier::Moderate => "moderate",
            ImpactTier::Low => "low",
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            ImpactTier::High => {
                "High-confidence configuration detected. System optimized for precision evaluation."
            }
            ImpactTier::Moderate => {
                "Balanced configuration active. Moderate weighting across evaluation dimensions."
            }
            ImpactTier::Low => {
                "Low-weight configuration. Consider increasing key metric priorities for better accuracy."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactAnalysis {
    /// Names of the heaviest metrics, heaviest first.
    pub emphasis: Vec<String>,
    pub average_weight: f64,
    pub tier: ImpactTier,
}

impl ImpactAnalysis {
    /// One-paragraph commentary, e.g. "Current emphasis: A, B, C. Balanced ..."
    pub fn summary(&self) -> String {
        format!(
            "Current emphasis: {}. {}",
            self.emphasis.join(", "),
            self.tier.commentary()
        )
    }
}

/// Classify the configuration by the average weight of its top-3 metrics.
///
/// The sum is always divided by three, so configurations with fewer than
/// three metrics read lower than their mean weight.
pub fn analyze_impact(config: &Configuration) -> ImpactAnalysis {
    let top = top_k(config, EMPHASIS_COUNT);
    let average_weight = top.iter().map(|(_, w)| w).sum::<f64>() / EMPHASIS_COUNT as f64;

    ImpactAnalysis {
        emphasis: top.into_iter().map(|(name, _)| name).collect(),
        average_weight,
        tier: ImpactTier::from_average(average_weight),
    }
}
