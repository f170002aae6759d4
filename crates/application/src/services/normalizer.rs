//! Response normalization
//!
//! Turns a raw API body into an ordered list of typed records, or the
//! reason there are none. Two envelope styles exist:
//!
//! * `bus` endpoints wrap results in `{ resultCode, resultDescription, <payload> }`
//!   and report failures through a non-zero `resultCode`.
//! * `geo` endpoints return the payload object directly and signal bad
//!   input by answering with a bare array instead.
//!
//! In both styles the payload is a single object when exactly one result
//! exists and an array otherwise; [`OneOrMany`] absorbs the difference.

use domain::OneOrMany;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// How an endpoint reports failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `resultCode` / `resultDescription` envelope
    ResultCode,
    /// No envelope; a top-level array means "incorrect values"
    Geo,
}

/// Why a response yields no records
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The service reported an application-level error
    #[error("API error {code}: {description}")]
    Api {
        /// Non-zero result code
        code: i64,
        /// Verbatim `resultDescription`
        description: String,
    },

    /// The response does not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Extract the records under `payload_field` from `raw`
///
/// A sequence is returned in order, a single object is wrapped, and a
/// missing or null field yields no records.
///
/// # Errors
///
/// Returns [`NormalizeError::Api`] for a non-zero `resultCode` and
/// [`NormalizeError::Malformed`] when the body or a record has the wrong shape.
pub fn normalize<T>(
    raw: &Value,
    payload_field: &str,
    envelope: Envelope,
) -> Result<Vec<T>, NormalizeError>
where
    T: DeserializeOwned,
{
    if envelope == Envelope::Geo && raw.is_array() {
        return Err(NormalizeError::Malformed(
            "service answered with a bare array".to_string(),
        ));
    }

    let Some(body) = raw.as_object() else {
        return Err(NormalizeError::Malformed(format!(
            "expected a JSON object, got {}",
            type_name(raw)
        )));
    };

    if let Some(code) = body.get("resultCode") {
        let code = result_code(code)?;
        if code != 0 {
            let description = body
                .get("resultDescription")
                .map(|d| d.as_str().map_or_else(|| d.to_string(), str::to_string))
                .unwrap_or_default();
            return Err(NormalizeError::Api { code, description });
        }
    }

    match body.get(payload_field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(payload) => OneOrMany::<T>::deserialize(payload)
            .map(OneOrMany::into_vec)
            .map_err(|e| NormalizeError::Malformed(format!("{payload_field}: {e}"))),
    }
}

fn result_code(value: &Value) -> Result<i64, NormalizeError> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| NormalizeError::Malformed(format!("unreadable resultCode {value}")))
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}


#[cfg(test)]
mod proptest_tests {
    use domain::Record;
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    proptest! {
        #[test]
        fn sequences_keep_length_and_order(ids in prop::collection::vec(0i64..10_000, 0..20)) {
            let payload: Vec<Value> = ids.iter().map(|n| json!({"n": n})).collect();
            let raw = json!({"resultCode": 0, "resultValues": payload});

            let records: Vec<Record> = normalize(&raw, "resultValues", Envelope::ResultCode).unwrap();

            let seen: Vec<i64> = records.iter().filter_map(|r| r["n"].as_i64()).collect();
            prop_assert_eq!(seen, ids);
        }

        #[test]
        fn single_object_is_one_record(n in any::<i64>(), name in "[a-zA-Z ]{0,12}") {
            let object = json!({"n": n, "name": name});
            let raw = json!({"arrives": object.clone()});

            let records: Vec<Record> = normalize(&raw, "arrives", Envelope::Geo).unwrap();

            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(Value::Object(records[0].clone()), object);
        }

        #[test]
        fn non_zero_code_always_errors(code in 1i64..1000, description in "[a-zA-Z ]{1,30}") {
            let raw = json!({
                "resultCode": code,
                "resultDescription": description.clone(),
                "resultValues": [{"n": 1}]
            });

            let err = normalize::<Record>(&raw, "resultValues", Envelope::ResultCode).unwrap_err();

            prop_assert_eq!(err, NormalizeError::Api { code, description });
        }
    }
}
