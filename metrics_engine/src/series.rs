//! Series model shared by every analytics component

use crate::error::{MetricsError, Result};
use metrics_math::stats;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Conventional key for monthly sales revenue
pub const SALES_REVENUE: &str = "salesRevenue";
/// Conventional key for customer acquisition cost
pub const CUSTOMER_ACQUISITION_COST: &str = "customerAcquisitionCost";
/// Conventional key for conversion rate (percentage)
pub const CONVERSION_RATE: &str = "conversionRate";

/// A single dated value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Month identifier, unique within a series
    pub period: String,
    /// Observed or predicted value
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// How forecast values of a metric are bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Monetary amounts and counts, never negative
    Amount,
    /// Rates expressed as a percentage in `[0, 100]`
    Percentage,
    /// Unbounded values
    Signed,
}

impl MetricKind {
    /// Infer the kind from a metric name
    pub fn infer(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("rate") || lower.contains("percent") {
            MetricKind::Percentage
        } else {
            MetricKind::Amount
        }
    }

    /// Bring a value into the range allowed for this kind
    pub fn clamp(&self, value: f64) -> f64 {
        match self {
            MetricKind::Amount => value.max(0.0),
            MetricKind::Percentage => value.clamp(0.0, 100.0),
            MetricKind::Signed => value,
        }
    }
}

/// Where a metric set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Generated demonstration data
    Demo,
    /// Data supplied by the user
    Real,
}

/// Ordered observations of one named metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesFields")]
pub struct Series {
    name: String,
    observations: Vec<Observation>,
    predicted: bool,
}

/// Unchecked wire form of a [`Series`]
#[derive(Deserialize)]
struct SeriesFields {
    name: String,
    observations: Vec<Observation>,
    #[serde(default)]
    predicted: bool,
}

impl TryFrom<SeriesFields> for Series {
    type Error = MetricsError;

    fn try_from(fields: SeriesFields) -> Result<Self> {
        let mut series = Series::from_observations(fields.name, fields.observations)?;
        series.predicted = fields.predicted;
        Ok(series)
    }
}

impl Series {
    /// Create an empty historical series
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observations: Vec::new(),
            predicted: false,
        }
    }

    /// Create a historical series, rejecting repeated periods
    pub fn from_observations(name: impl Into<String>, observations: Vec<Observation>) -> Result<Self> {
        let name = name.into();
        let mut seen = HashSet::with_capacity(observations.len());
        for observation in &observations {
            if !seen.insert(observation.period.as_str()) {
                return Err(MetricsError::DataError(format!(
                    "Period '{}' appears more than once in series '{}'",
                    observation.period, name
                )));
            }
        }

        Ok(Self {
            name,
            observations,
            predicted: false,
        })
    }

    /// Create a historical series from `(period, value)` pairs
    pub fn from_pairs<I, P>(name: impl Into<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<String>,
    {
        let observations = pairs
            .into_iter()
            .map(|(period, value)| Observation::new(period, value))
            .collect();
        Self::from_observations(name, observations)
    }

    /// Create a series of model-produced future observations
    pub(crate) fn predicted(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
            predicted: true,
        }
    }

    /// Append an observation, replacing the value of an existing period
    pub fn upsert(&mut self, period: impl Into<String>, value: f64) {
        let period = period.into();
        match self.observations.iter_mut().find(|o| o.period == period) {
            Some(existing) => existing.value = value,
            None => self.observations.push(Observation::new(period, value)),
        }
    }

    /// Metric name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observations in chronological order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Whether the observations are model-produced
    pub fn is_predicted(&self) -> bool {
        self.predicted
    }

    /// Bounding rule inferred from the metric name
    pub fn kind(&self) -> MetricKind {
        MetricKind::infer(&self.name)
    }

    /// Observation values in order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when there are no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent observation
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Arithmetic mean of the values, `0.0` when empty
    pub fn mean(&self) -> f64 {
        stats::mean(&self.values())
    }

    /// Series made of the last `count` observations
    pub fn tail(&self, count: usize) -> Series {
        let start = self.observations.len().saturating_sub(count);
        Series {
            name: self.name.clone(),
            observations: self.observations[start..].to_vec(),
            predicted: self.predicted,
        }
    }
}

/// Named collection of series, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    series: Vec<Series>,
}

impl MetricSet {
    /// Create an empty metric set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, replacing any series with the same name in place
    pub fn insert(&mut self, series: Series) {
        match self.series.iter_mut().find(|s| s.name == series.name) {
            Some(existing) => *existing = series,
            None => self.series.push(series),
        }
    }

    /// Look up a series by metric name
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Iterate series in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Metric names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when the set holds no metrics
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl FromIterator<Series> for MetricSet {
    fn from_iter<T: IntoIterator<Item = Series>>(iter: T) -> Self {
        let mut set = MetricSet::new();
        for series in iter {
            set.insert(series);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// Serialized as `{ name: [ {period, value}, ... ] }`
impl Serialize for MetricSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for series in &self.series {
            map.serialize_entry(&series.name, &series.observations)?;
        }
        map.end()
    }
}
