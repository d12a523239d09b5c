//! Data models for benchmark reports.
//!
//! This module contains the frequency categories, the raw record shape
//! emitted by the router benchmark, and the normalized decision used by
//! the aggregator and renderers.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// How often a recommended action should recur.
///
/// The declaration order is the fixed reporting order used by every
/// aggregated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frequency {
    /// Act right now
    Immediate,
    /// Ongoing, always-on work
    Continuous,
    /// Investigation before acting
    Analysis,
    /// Tuning of an existing process
    Optimization,
    /// Long-horizon change
    Evolution,
}

impl Frequency {
    /// All categories in reporting order.
    pub const ALL: [Frequency; 5] = [
        Frequency::Immediate,
        Frequency::Continuous,
        Frequency::Analysis,
        Frequency::Optimization,
        Frequency::Evolution,
    ];

    /// Lowercase label as it appears in benchmark output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Immediate => "immediate",
            Frequency::Continuous => "continuous",
            Frequency::Analysis => "analysis",
            Frequency::Optimization => "optimization",
            Frequency::Evolution => "evolution",
        }
    }

    /// Position in [`Frequency::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "immediate" => Ok(Frequency::Immediate),
            "continuous" => Ok(Frequency::Continuous),
            "analysis" => Ok(Frequency::Analysis),
            "optimization" => Ok(Frequency::Optimization),
            "evolution" => Ok(Frequency::Evolution),
            other => Err(format!("unknown frequency '{}'", other)),
        }
    }
}

/// A benchmark record as it appears in the input file.
///
/// The harness writes PascalCase keys; camelCase is accepted as well. Fields
/// are read one at a time, so a field of the wrong type only loses that
/// field and never the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkRecord {
    pub recommended_frequency: Option<String>,
    pub goal: Option<String>,
    pub context: Option<String>,
    pub economic_value: Option<f64>,
    pub timestamp: Option<String>,
    pub was_successful: Option<bool>,
    /// Either `"<ticks> Ticks"` or `"H:M:S"`; anything else is ignored.
    pub execution_time: Option<Value>,
}

impl BenchmarkRecord {
    /// Read the known fields of a JSON object.
    ///
    /// Missing and `null` fields are `None`. A field of the wrong type is
    /// `None` too, with a warning.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            recommended_frequency: string_field(object, "RecommendedFrequency", "recommendedFrequency"),
            goal: string_field(object, "Goal", "goal"),
            context: string_field(object, "Context", "context"),
            economic_value: typed_field(object, "EconomicValue", "economicValue", Value::as_f64),
            timestamp: string_field(object, "Timestamp", "timestamp"),
            was_successful: typed_field(object, "WasSuccessful", "wasSuccessful", Value::as_bool),
            execution_time: lookup(object, "ExecutionTime", "executionTime").cloned(),
        }
    }
}

/// PascalCase key wins over its camelCase alias.
fn lookup<'a>(object: &'a Map<String, Value>, key: &str, alias: &str) -> Option<&'a Value> {
    object
        .get(key)
        .or_else(|| object.get(alias))
        .filter(|value| !value.is_null())
}

fn typed_field<T>(
    object: &Map<String, Value>,
    key: &str,
    alias: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = lookup(object, key, alias)?;
    let typed = read(value);
    if typed.is_none() {
        warn!("Ignoring {} with unexpected value {}", key, value);
    }
    typed
}

fn string_field(object: &Map<String, Value>, key: &str, alias: &str) -> Option<String> {
    typed_field(object, key, alias, |value| value.as_str().map(str::to_string))
}

/// A qualifying record with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub frequency: Frequency,
    pub goal: String,
    pub context: String,
    pub economic_value: f64,
    pub timestamp: String,
    pub successful: bool,
    /// Processing time in milliseconds, when the record carried a parsable one.
    pub processing_ms: Option<f64>,
}

impl Decision {
    /// Returns a glyph for the success column of the decisions table.
    pub fn success_glyph(&self) -> &'static str {
        if self.successful {
            "✅"
        } else {
            "❌"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_frequency_order() {
        assert!(Frequency::Immediate < Frequency::Continuous);
        assert!(Frequency::Optimization < Frequency::Evolution);
        for (i, freq) in Frequency::ALL.iter().enumerate() {
            assert_eq!(freq.index(), i);
        }
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("immediate".parse::<Frequency>(), Ok(Frequency::Immediate));
        assert_eq!(" Evolution ".parse::<Frequency>(), Ok(Frequency::Evolution));
        assert_eq!("ANALYSIS".parse::<Frequency>(), Ok(Frequency::Analysis));
        assert!("weekly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_frequency_display() {
        assert_eq!(Frequency::Optimization.to_string(), "optimization");
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn test_record_accepts_both_key_styles() {
        let pascal = BenchmarkRecord::from_object(&object(json!({
            "RecommendedFrequency": "immediate",
            "Goal": "Fix outage",
            "EconomicValue": 90
        })));
        assert_eq!(pascal.recommended_frequency.as_deref(), Some("immediate"));
        assert_eq!(pascal.goal.as_deref(), Some("Fix outage"));
        assert_eq!(pascal.economic_value, Some(90.0));

        let camel = BenchmarkRecord::from_object(&object(json!({
            "recommendedFrequency": "analysis",
            "wasSuccessful": false,
            "extra": 1
        })));
        assert_eq!(camel.recommended_frequency.as_deref(), Some("analysis"));
        assert_eq!(camel.was_successful, Some(false));
    }

    #[test]
    fn test_wrong_typed_fields_are_dropped_individually() {
        let record = BenchmarkRecord::from_object(&object(json!({
            "RecommendedFrequency": "immediate",
            "Goal": 42,
            "EconomicValue": "80",
            "WasSuccessful": "yes",
            "Context": null,
            "ExecutionTime": 1234
        })));
        assert_eq!(record.recommended_frequency.as_deref(), Some("immediate"));
        assert_eq!(record.goal, None);
        assert_eq!(record.economic_value, None);
        assert_eq!(record.was_successful, None);
        assert_eq!(record.context, None);
        assert_eq!(record.execution_time, Some(json!(1234)));
    }

    #[test]
    fn test_pascal_key_wins_over_alias() {
        let record = BenchmarkRecord::from_object(&object(json!({
            "RecommendedFrequency": "evolution",
            "Goal": "Pascal",
            "goal": "camel"
        })));
        assert_eq!(record.goal.as_deref(), Some("Pascal"));
    }

    #[test]
    fn test_success_glyph() {
        let decision = Decision {
            frequency: Frequency::Immediate,
            goal: String::new(),
            context: String::new(),
            economic_value: 0.0,
            timestamp: String::new(),
            successful: false,
            processing_ms: None,
        };
        assert_eq!(decision.success_glyph(), "❌");
        assert_eq!(
            Decision {
                successful: true,
                ..decision
            }
            .success_glyph(),
            "✅"
        );
    }
}
