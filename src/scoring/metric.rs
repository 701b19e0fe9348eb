use std::fmt;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const MIN_WEIGHT: f64 = 0.0;
pub const MAX_WEIGHT: f64 = 1.0;

/// Faults raised by the scoring engine.
///
/// `UnknownMetric` is the only fault a well-formed configuration can produce at
/// runtime; the rest come from constructing entries out of untrusted input.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    UnknownMetric(String),
    DuplicateMetric(String),
    EmptyName,
    InvalidScore { name: String, score: f64 },
    InvalidWeight { name: String, weight: f64 },
    NonFiniteWeight { name: String },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::UnknownMetric(name) => write!(f, "Unknown metric: '{}'", name),
            ScoreError::DuplicateMetric(name) => write!(f, "Duplicate metric: '{}'", name),
            ScoreError::EmptyName => write!(f, "Metric name must not be empty"),
            ScoreError::InvalidScore { name, score } => write!(
                f,
                "Metric '{}': score {} outside [{}, {}]",
                name, score, MIN_SCORE, MAX_SCORE
            ),
            ScoreError::InvalidWeight { name, weight } => write!(
                f,
                "Metric '{}': weight {} outside [{}, {}]",
                name, weight, MIN_WEIGHT, MAX_WEIGHT
            ),
            ScoreError::NonFiniteWeight { name } => {
                write!(f, "Metric '{}': weight must be a finite number", name)
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Clamp into [0, 1]. `clamp` keeps the sign of `-0.0`, so zero is normalized.
fn normalize_weight(weight: f64) -> f64 {
    let weight = weight.clamp(MIN_WEIGHT, MAX_WEIGHT);
    if weight == 0.0 {
        0.0
    } else {
        weight
    }
}

/// A named evaluation dimension with a fixed score and an adjustable weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    name: String,
    score: f64,
    weight: f64,
}

impl MetricEntry {
    /// Build an entry from untrusted input, rejecting anything out of range.
    /// Surrounding whitespace is stripped from the name.
    pub fn new(name: impl Into<String>, score: f64, weight: f64) -> Result<Self, ScoreError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ScoreError::EmptyName);
        }
        if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ScoreError::InvalidScore { name, score });
        }
        if !weight.is_finite() || !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(ScoreError::InvalidWeight { name, weight });
        }
        Ok(Self {
            name,
            score,
            weight: normalize_weight(weight),
        })
    }

    /// Build an entry from trusted static data, clamping instead of failing.
    pub(crate) fn clamped(name: &str, score: f64, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            score: score.clamp(MIN_SCORE, MAX_SCORE),
            weight: normalize_weight(weight),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Store a weight, clamped into [0, 1]. Callers must reject NaN/inf first.
    pub(crate) fn store_weight(&mut self, weight: f64) {
        self.weight = normalize_weight(weight);
    }
}

/// Ordered set of metrics keyed by name.
///
/// Insertion order is kept for display. Lookups are linear; a configuration
/// holds a handful of metrics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Configuration {
    entries: Vec<MetricEntry>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration, rejecting duplicate names.
    pub fn from_entries<I>(entries: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = MetricEntry>,
    {
        let mut config = Self::new();
        for entry in entries {
            config.insert(entry)?;
        }
        Ok(config)
    }

    /// Append an entry. Names are unique; a second entry with the same name is an error.
    pub fn insert(&mut self, entry: MetricEntry) -> Result<(), ScoreError> {
        if self.contains(entry.name()) {
            return Err(ScoreError::DuplicateMetric(entry.name));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MetricEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut MetricEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a MetricEntry;
    type IntoIter = std::slice::Iter<'a, MetricEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
