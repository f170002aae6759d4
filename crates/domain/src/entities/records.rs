//! Typed records of the transit API payloads
//!
//! Field names follow the wire format. Numeric fields are accepted as JSON
//! numbers or numeric strings because the two API generations disagree;
//! identifiers are accepted as strings or numbers for the same reason.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::OneOrMany;

/// An untyped payload record
pub type Record = serde_json::Map<String, Value>;

/// Countdowns at or above this many seconds carry no real estimate
pub const NO_ESTIMATE_SECONDS: i64 = 999_999;

/// One day of the service calendar (`GetCalendar`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Day-of-week code (`L`..`D`)
    pub day_of_week: String,
    /// Date, possibly with a time suffix
    pub date: String,
    /// Day-type code (`LA`, `V`, `SA`, `FE`)
    pub day_type: String,
}

impl CalendarDay {
    /// The date without any time suffix (first ten characters)
    #[must_use]
    pub fn date_only(&self) -> &str {
        self.date
            .char_indices()
            .nth(10)
            .map_or(self.date.as_str(), |(idx, _)| &self.date[..idx])
    }
}

/// A line with its terminals (`GetListLines`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    #[serde(deserialize_with = "flexible_string")]
    pub label: String,
    pub name_a: String,
    pub name_b: String,
}

/// A stop and the lines serving it (`GetNodesLines`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopNode {
    #[serde(deserialize_with = "flexible_int")]
    pub node: i64,
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many_or_null")]
    pub lines: OneOrMany<Value>,
}

impl StopNode {
    /// Labels of the serving lines, in wire order
    #[must_use]
    pub fn line_labels(&self) -> Vec<String> {
        self.lines.as_slice().iter().map(value_label).collect()
    }
}

/// A stop along a line's route (`GetRouteLines`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub name: String,
    #[serde(deserialize_with = "flexible_int")]
    pub node: i64,
    /// Meters from the line's origin
    #[serde(deserialize_with = "flexible_int")]
    pub distance: i64,
    /// Meters from the previous stop
    #[serde(deserialize_with = "flexible_int")]
    pub distance_previous_stop: i64,
}

/// First and last services of a line for one day type (`GetTimesLines`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSchedule {
    #[serde(deserialize_with = "flexible_string")]
    pub line: String,
    pub type_day: String,
    pub date_first: String,
    pub date_end: String,
    pub time_first_a: String,
    pub time_end_a: String,
    pub time_first_b: String,
    pub time_end_b: String,
}

/// Time left until a bus reaches the stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// A precise estimate
    Estimate { minutes: i64, seconds: i64 },
    /// The API has no estimate, the bus is more than twenty minutes away
    NoEstimate,
}

/// A real-time arrival at a stop (`GetArriveStop`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    #[serde(deserialize_with = "flexible_string")]
    pub line_id: String,
    pub destination: String,
    /// Seconds until arrival, or a sentinel >= [`NO_ESTIMATE_SECONDS`]
    #[serde(deserialize_with = "flexible_int")]
    pub bus_time_left: i64,
    /// Meters between bus and stop
    #[serde(deserialize_with = "flexible_int")]
    pub bus_distance: i64,
}

impl Arrival {
    /// Split the countdown into minutes and seconds, honouring the sentinel
    #[must_use]
    pub const fn countdown(&self) -> Countdown {
        if self.bus_time_left >= NO_ESTIMATE_SECONDS {
            return Countdown::NoEstimate;
        }
        let secs = if self.bus_time_left < 0 {
            0
        } else {
            self.bus_time_left
        };
        Countdown::Estimate {
            minutes: secs / 60,
            seconds: secs % 60,
        }
    }
}

/// Frequency text for one direction of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionFrequency {
    #[serde(default)]
    pub frequency_description: String,
}

/// Frequencies of a line for one day type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTypeFrequency {
    #[serde(deserialize_with = "flexible_string")]
    pub day_type_id: String,
    pub direction1: DirectionFrequency,
    pub direction2: DirectionFrequency,
}

/// Extended line information (`GetInfoLineExtend`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDetail {
    #[serde(deserialize_with = "flexible_string")]
    pub label: String,
    pub header_a: String,
    pub header_b: String,
    #[serde(default, deserialize_with = "flexible_int")]
    pub incidents: i64,
    #[serde(default, deserialize_with = "one_or_many_or_null")]
    pub day_type: OneOrMany<DayTypeFrequency>,
}

/// A line serving a nearby stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopLine {
    #[serde(deserialize_with = "flexible_string")]
    pub label: String,
}

/// A stop within a radius of another stop (`GetStopsFromStop`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyStop {
    #[serde(deserialize_with = "flexible_string")]
    pub stop_id: String,
    pub name: String,
    #[serde(default)]
    pub postal_address: String,
    #[serde(default, deserialize_with = "one_or_many_or_null")]
    pub line: OneOrMany<StopLine>,
}

/// Render a scalar JSON value as a label
fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map.get("label").map_or_else(|| value.to_string(), value_label),
        other => other.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn flexible_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| de::Error::custom(format!("integer out of range: {n}"))),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .or_else(|_| trimmed.parse::<f64>().map(|f| f.trunc() as i64))
                .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}")))
        },
        other => Err(de::Error::custom(format!("expected an integer, got {other}"))),
    }
}

/// An explicit `null` counts as no values, like a missing key
fn one_or_many_or_null<'de, D, T>(deserializer: D) -> Result<OneOrMany<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected a string, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn calendar_date_drops_time_suffix() {
        let day: CalendarDay = serde_json::from_value(json!({
            "dayOfWeek": "X",
            "date": "07/02/2024 00:00:00",
            "dayType": "LA"
        }))
        .unwrap();
        assert_eq!(day.date_only(), "07/02/2024");
    }

    #[test]
    fn calendar_short_date_is_kept() {
        let day = CalendarDay {
            day_of_week: "L".to_string(),
            date: "1/2/24".to_string(),
            day_type: "LA".to_string(),
        };
        assert_eq!(day.date_only(), "1/2/24");
    }

    #[test]
    fn numeric_strings_and_floats_become_integers() {
        let stop: RouteStop = serde_json::from_value(json!({
            "name": "Sol",
            "node": "71",
            "distance": 1234.9,
            "distancePreviousStop": " 300 "
        }))
        .unwrap();
        assert_eq!(stop.node, 71);
        assert_eq!(stop.distance, 1234);
        assert_eq!(stop.distance_previous_stop, 300);
    }

    #[test]
    fn non_numeric_integer_field_fails() {
        let result: Result<RouteStop, _> = serde_json::from_value(json!({
            "name": "Sol",
            "node": "seventy-one",
            "distance": 0,
            "distancePreviousStop": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn numeric_line_id_becomes_string() {
        let arrival: Arrival = serde_json::from_value(json!({
            "lineId": 27,
            "destination": "Pinar",
            "busTimeLeft": 95,
            "busDistance": 450
        }))
        .unwrap();
        assert_eq!(arrival.line_id, "27");
    }

    #[test]
    fn countdown_splits_minutes_and_seconds() {
        let arrival = Arrival {
            line_id: "27".to_string(),
            destination: "Pinar".to_string(),
            bus_time_left: 125,
            bus_distance: 0,
        };
        assert_eq!(
            arrival.countdown(),
            Countdown::Estimate {
                minutes: 2,
                seconds: 5
            }
        );
    }

    #[test]
    fn countdown_sentinel_has_no_estimate() {
        for secs in [NO_ESTIMATE_SECONDS, 1_500_000] {
            let arrival = Arrival {
                line_id: "27".to_string(),
                destination: "Pinar".to_string(),
                bus_time_left: secs,
                bus_distance: 0,
            };
            assert_eq!(arrival.countdown(), Countdown::NoEstimate);
        }
    }

    #[test]
    fn negative_countdown_is_zero() {
        let arrival = Arrival {
            line_id: "27".to_string(),
            destination: "Pinar".to_string(),
            bus_time_left: -4,
            bus_distance: 0,
        };
        assert_eq!(
            arrival.countdown(),
            Countdown::Estimate {
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn nearby_stop_accepts_single_line() {
        let stop: NearbyStop = serde_json::from_value(json!({
            "stopId": 72,
            "name": "Plaza de Cibeles",
            "postalAddress": "Calle de Alcalá, 1",
            "line": {"label": "27"}
        }))
        .unwrap();
        assert_eq!(stop.stop_id, "72");
        assert_eq!(stop.line.len(), 1);
        assert_eq!(stop.line.as_slice()[0].label, "27");
    }

    #[test]
    fn nearby_stop_accepts_line_list() {
        let stop: NearbyStop = serde_json::from_value(json!({
            "stopId": "72",
            "name": "Plaza de Cibeles",
            "postalAddress": "Calle de Alcalá, 1",
            "line": [{"label": "5"}, {"label": "27"}, {"label": 150}]
        }))
        .unwrap();
        let labels: Vec<_> = stop.line.as_slice().iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["5", "27", "150"]);
    }

    #[test]
    fn stop_node_line_labels_handle_both_shapes() {
        let many: StopNode = serde_json::from_value(json!({
            "node": 71,
            "name": "Sol",
            "lines": ["27/1", "5/2"]
        }))
        .unwrap();
        assert_eq!(many.line_labels(), ["27/1", "5/2"]);

        let one: StopNode = serde_json::from_value(json!({
            "node": 71,
            "name": "Sol",
            "lines": "27/1"
        }))
        .unwrap();
        assert_eq!(one.line_labels(), ["27/1"]);
    }

    #[test]
    fn null_collections_are_empty() {
        let node: StopNode = serde_json::from_value(json!({
            "node": 71,
            "name": "SOL",
            "lines": null
        }))
        .unwrap();
        assert!(node.lines.is_empty());
        assert!(node.line_labels().is_empty());

        let stop: NearbyStop = serde_json::from_value(json!({
            "stopId": "72",
            "name": "Plaza de Cibeles",
            "line": null
        }))
        .unwrap();
        assert!(stop.line.is_empty());

        let detail: LineDetail = serde_json::from_value(json!({
            "label": "27",
            "headerA": "Embajadores",
            "headerB": "Plaza Castilla",
            "dayType": null
        }))
        .unwrap();
        assert!(detail.day_type.is_empty());
    }

    #[test]
    fn line_detail_accepts_single_day_type() {
        let detail: LineDetail = serde_json::from_value(json!({
            "label": "27",
            "headerA": "Embajadores",
            "headerB": "Plaza Castilla",
            "incidents": "0",
            "dayType": {
                "dayTypeId": "LA",
                "direction1": {"frequencyDescription": "5-8 min"},
                "direction2": {"frequencyDescription": "6-9 min"}
            }
        }))
        .unwrap();
        assert_eq!(detail.day_type.len(), 1);
        assert_eq!(detail.incidents, 0);
    }
}
