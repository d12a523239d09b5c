//! Decision aggregation and statistics.
//!
//! This module turns raw benchmark values into normalized decisions and
//! computes the per-frequency summaries consumed by both renderers.

use super::duration::parse_execution_time;
use super::stats::{mean, percentage};
use crate::models::{BenchmarkRecord, Decision, Frequency};
use serde_json::Value;
use tracing::debug;

/// Statistics for a single frequency category.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyStats {
    pub frequency: Frequency,
    /// Number of decisions in this category.
    pub count: usize,
    /// Share of all qualifying decisions, in percent.
    pub percentage: f64,
    /// Economic values in input order.
    pub economic_values: Vec<f64>,
    pub avg_economic_value: f64,
    /// Number of decisions that carried a parsable processing time.
    pub timed: usize,
    pub avg_processing_ms: f64,
    pub successes: usize,
    /// `successes / count * 100`, 0 for an empty category.
    pub success_rate: f64,
}

/// Everything the renderers need, computed once per run.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    /// Qualifying decisions in input order.
    pub decisions: Vec<Decision>,
    /// Number of input values that were not router decisions.
    pub skipped: usize,
    /// One entry per category, in [`Frequency::ALL`] order.
    pub by_frequency: Vec<FrequencyStats>,
}

impl AggregateResult {
    /// Build the aggregate from already normalized decisions.
    pub fn from_decisions(decisions: Vec<Decision>, skipped: usize) -> Self {
        let total = decisions.len();

        let by_frequency = Frequency::ALL
            .iter()
            .map(|&frequency| {
                let group: Vec<&Decision> = decisions
                    .iter()
                    .filter(|d| d.frequency == frequency)
                    .collect();
                let economic_values: Vec<f64> = group.iter().map(|d| d.economic_value).collect();
                let times: Vec<f64> = group.iter().filter_map(|d| d.processing_ms).collect();
                let successes = group.iter().filter(|d| d.successful).count();

                FrequencyStats {
                    frequency,
                    count: group.len(),
                    percentage: percentage(group.len(), total),
                    avg_economic_value: mean(&economic_values),
                    economic_values,
                    timed: times.len(),
                    avg_processing_ms: mean(&times),
                    successes,
                    success_rate: percentage(successes, group.len()),
                }
            })
            .collect();

        Self {
            decisions,
            skipped,
            by_frequency,
        }
    }

    /// Total number of qualifying decisions.
    pub fn total(&self) -> usize {
        self.decisions.len()
    }

    /// Statistics for one category.
    pub fn stats(&self, frequency: Frequency) -> &FrequencyStats {
        &self.by_frequency[frequency.index()]
    }

    /// Mean economic value over all decisions.
    pub fn avg_economic_value(&self) -> f64 {
        let values: Vec<f64> = self.decisions.iter().map(|d| d.economic_value).collect();
        mean(&values)
    }

    /// Processing times of every timed decision, in input order.
    pub fn processing_times(&self) -> Vec<f64> {
        self.decisions
            .iter()
            .filter_map(|d| d.processing_ms)
            .collect()
    }

    /// Mean processing time over timed decisions.
    pub fn avg_processing_ms(&self) -> f64 {
        mean(&self.processing_times())
    }

    /// Whether any decision carried a processing time.
    pub fn has_processing_data(&self) -> bool {
        self.decisions.iter().any(|d| d.processing_ms.is_some())
    }

    /// Overall success rate in percent.
    pub fn success_rate(&self) -> f64 {
        let successes = self.decisions.iter().filter(|d| d.successful).count();
        percentage(successes, self.total())
    }
}

/// Normalize one raw value into a decision.
///
/// Returns `None` for anything that is not a router decision: non-objects,
/// objects without a frequency, and unknown frequency labels.
pub fn to_decision(value: &Value) -> Option<Decision> {
    let Some(object) = value.as_object() else {
        debug!("Skipping non-object entry");
        return None;
    };

    let record = BenchmarkRecord::from_object(object);
    let label = record.recommended_frequency?;
    let frequency = match label.parse::<Frequency>() {
        Ok(frequency) => frequency,
        Err(e) => {
            debug!("Skipping record: {}", e);
            return None;
        }
    };

    let processing_ms = match record.execution_time {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => {
            let parsed = parse_execution_time(&raw);
            if parsed.is_none() {
                debug!("Ignoring unparsable execution time '{}'", raw);
            }
            parsed
        }
        Some(other) => {
            debug!("Ignoring non-string execution time {}", other);
            None
        }
    };

    Some(Decision {
        frequency,
        goal: record.goal.unwrap_or_default(),
        context: record.context.unwrap_or_default(),
        economic_value: record.economic_value.unwrap_or(0.0),
        timestamp: record.timestamp.unwrap_or_default(),
        successful: record.was_successful.unwrap_or(true),
        processing_ms,
    })
}

/// Aggregate raw benchmark values.
pub fn aggregate(values: &[Value]) -> AggregateResult {
    let mut decisions = Vec::with_capacity(values.len());
    let mut skipped = 0;

    for value in values {
        match to_decision(value) {
            Some(decision) => decisions.push(decision),
            None => skipped += 1,
        }
    }

    debug!(
        "Aggregated {} decisions ({} entries skipped)",
        decisions.len(),
        skipped
    );

    AggregateResult::from_decisions(decisions, skipped)
}
