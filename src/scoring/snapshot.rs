use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Score and weight of one metric, as written to export files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    pub score: f64,
    pub weight: f64,
}

/// `name -> {score, weight}` in insertion order.
///
/// Serialized as a JSON object. serde_json's `Map` sorts keys, so the
/// order-preserving (de)serialization is done by hand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsMap(pub Vec<(String, MetricValues)>);

impl MetricsMap {
    pub fn get(&self, name: &str) -> Option<&MetricValues> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValues)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for MetricsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, values) in &self.0 {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MetricsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetricsMapVisitor;

        impl<'de> Visitor<'de> for MetricsMapVisitor {
            type Value = MetricsMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of metric name to {score, weight}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MetricsMap, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, values)) = access.next_entry::<String, MetricValues>()? {
                    entries.push((name, values));
                }
                Ok(MetricsMap(entries))
            }
        }

        deserializer.deserialize_map(MetricsMapVisitor)
    }
}

/// Flattened snapshot of a configuration and its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub metrics: MetricsMap,
    pub final_score: f64,
}
