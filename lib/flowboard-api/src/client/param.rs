use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use super::error::ApiClientError;

/// Parameter styles understood by the FlowBoard endpoints.
///
/// `Simple` is the OpenAPI default for both path and query parameters: scalars
/// and array elements are emitted verbatim, and whole objects collapse into one
/// compact JSON value. `DeepObject` flattens object properties into bracketed
/// key segments (`filter[status]=OPEN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamStyle {
    /// Default style: repeated keys for arrays, JSON text for objects.
    #[default]
    Simple,
    /// Deep object style: `?obj[key]=value`, nested to arbitrary depth.
    DeepObject,
}

/// A path or query parameter value as a closed set of wire-relevant kinds.
///
/// The serializer dispatches on this tag rather than on runtime type
/// inspection, which keeps every branch of [`serialize`] testable in isolation.
/// Object properties keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Absent value; serializes to nothing.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(serde_json::Number),
    /// String scalar.
    String(String),
    /// Timestamp, formatted as an ISO-8601 UTC instant.
    Date(DateTime<Utc>),
    /// Ordered sequence; each element serializes under the same key.
    Array(Vec<ParamValue>),
    /// Ordered key/value object.
    Object(IndexMap<String, ParamValue>),
}

impl ParamValue {
    /// Converts the value into plain JSON. Dates become their ISO-8601 string.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Number(number) => serde_json::Value::Number(number.clone()),
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Date(date) => serde_json::Value::String(format_timestamp(date)),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/// JavaScript `Date.toISOString()` shape: UTC, millisecond precision, `Z` suffix.
fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Expands a parameter value into its query-string key/value pairs.
///
/// - `Null` emits nothing.
/// - Dates format as ISO-8601 timestamps and require a key.
/// - Arrays serialize each element independently under the same key, in order.
/// - Objects with a key collapse to compact JSON (`deep == false`) or flatten
///   every property under `key[property]`, recursively (`deep == true`).
/// - Objects without a key expand each property under the property's own name.
/// - Scalars emit a single pair and require a key.
///
/// The routine is pure: output order follows the value's iteration order, so
/// equivalent inputs always produce identical pair sequences.
///
/// # Errors
///
/// Returns [`ApiClientError::Encoding`] when a scalar or date value is given
/// without a key to serialize under.
pub fn serialize(
    value: &ParamValue,
    key: Option<&str>,
    deep: bool,
) -> Result<Vec<(String, String)>, ApiClientError> {
    let mut pairs = Vec::new();
    serialize_into(value, key, deep, &mut pairs)?;
    Ok(pairs)
}

fn serialize_into(
    value: &ParamValue,
    key: Option<&str>,
    deep: bool,
    pairs: &mut Vec<(String, String)>,
) -> Result<(), ApiClientError> {
    match value {
        ParamValue::Null => Ok(()),
        ParamValue::Date(date) => {
            let Some(key) = key else {
                return Err(ApiClientError::encoding(
                    "key may not be null if value is a date",
                ));
            };
            pairs.push((key.to_string(), format_timestamp(date)));
            Ok(())
        }
        ParamValue::Array(items) => {
            for item in items {
                serialize_into(item, key, deep, pairs)?;
            }
            Ok(())
        }
        ParamValue::Object(entries) => match key {
            Some(key) if deep => {
                for (property, nested) in entries {
                    let bracketed = format!("{key}[{property}]");
                    serialize_into(nested, Some(&bracketed), true, pairs)?;
                }
                Ok(())
            }
            Some(key) => {
                let json = serde_json::to_string(&value.to_json())?;
                pairs.push((key.to_string(), json));
                Ok(())
            }
            None => {
                for (property, nested) in entries {
                    serialize_into(nested, Some(property), deep, pairs)?;
                }
                Ok(())
            }
        },
        scalar => {
            let Some(key) = key else {
                return Err(ApiClientError::encoding(
                    "key may not be null if value is not an object or array",
                ));
            };
            let text = match scalar {
                ParamValue::Bool(value) => value.to_string(),
                ParamValue::Number(number) => number.to_string(),
                ParamValue::String(text) => text.clone(),
                // Null, Date, Array and Object are handled above
                _ => unreachable!("non-scalar handled in earlier arms"),
            };
            pairs.push((key.to_string(), text));
            Ok(())
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! param_value_from_integer {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                Self::Number(serde_json::Number::from(value))
            }
        })*
    };
}

param_value_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Uuid> for ParamValue {
    fn from(value: Uuid) -> Self {
        Self::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::String(value.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, nested)| (key, Self::from(nested)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn object(entries: Vec<(&str, ParamValue)>) -> ParamValue {
        ParamValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    #[test]
    fn should_emit_nothing_for_null() {
        let pairs = serialize(&ParamValue::Null, Some("missing"), false).expect("serialize");
        assert!(pairs.is_empty());
    }

    #[test]
    fn should_serialize_scalars_under_key() {
        let pairs = serialize(&ParamValue::from("open"), Some("status"), false).expect("serialize");
        assert_eq!(pairs, vec![("status".to_string(), "open".to_string())]);

        let pairs = serialize(&ParamValue::from(42), Some("limit"), false).expect("serialize");
        assert_eq!(pairs, vec![("limit".to_string(), "42".to_string())]);

        let pairs = serialize(&ParamValue::from(true), Some("billable"), false).expect("serialize");
        assert_eq!(pairs, vec![("billable".to_string(), "true".to_string())]);
    }

    #[test]
    fn should_fail_on_scalar_without_key() {
        let result = serialize(&ParamValue::from("orphan"), None, false);
        assert!(matches!(result, Err(ApiClientError::Encoding { .. })));
    }

    #[test]
    fn should_format_dates_as_iso_8601() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap();
        let pairs = serialize(&ParamValue::Date(date), Some("logDate"), false).expect("serialize");
        assert_eq!(
            pairs,
            vec![("logDate".to_string(), "2024-03-01T10:15:30.000Z".to_string())]
        );
    }

    #[test]
    fn should_fail_on_date_without_key() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap();
        let result = serialize(&ParamValue::Date(date), None, false);
        assert!(matches!(result, Err(ApiClientError::Encoding { .. })));
    }

    #[test]
    fn should_round_trip_dates_to_the_second() {
        let date = Utc.with_ymd_and_hms(2023, 11, 5, 8, 0, 59).unwrap();
        let pairs = serialize(&ParamValue::Date(date), Some("logDate"), false).expect("serialize");
        let (_, text) = pairs.first().expect("one pair");
        let parsed: DateTime<Utc> = text.parse().expect("valid ISO-8601");
        assert_eq!(parsed.timestamp(), date.timestamp());
    }

    #[test]
    fn should_repeat_key_for_arrays_in_order() {
        let tags = ParamValue::from(vec!["rust", "web", "api"]);
        let pairs = serialize(&tags, Some("tags"), false).expect("serialize");
        assert_eq!(
            pairs,
            vec![
                ("tags".to_string(), "rust".to_string()),
                ("tags".to_string(), "web".to_string()),
                ("tags".to_string(), "api".to_string()),
            ]
        );
    }

    #[test]
    fn should_collapse_object_to_json_in_simple_style() {
        let filter = object(vec![
            ("status", ParamValue::from("OPEN")),
            ("limit", ParamValue::from(10)),
        ]);
        let pairs = serialize(&filter, Some("filter"), false).expect("serialize");
        assert_eq!(
            pairs,
            vec![(
                "filter".to_string(),
                r#"{"status":"OPEN","limit":10}"#.to_string()
            )]
        );
    }

    #[test]
    fn should_flatten_object_with_bracketed_keys_in_deep_style() {
        let filter = object(vec![
            ("a", ParamValue::from("1")),
            ("b", ParamValue::from("2")),
        ]);
        let pairs = serialize(&filter, Some("q"), true).expect("serialize");
        assert_eq!(
            pairs,
            vec![
                ("q[a]".to_string(), "1".to_string()),
                ("q[b]".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn should_recurse_deep_style_to_arbitrary_depth() {
        let inner = object(vec![("b", ParamValue::from("v"))]);
        let outer = object(vec![("a", inner)]);
        let pairs = serialize(&outer, Some("q"), true).expect("serialize");
        assert_eq!(pairs, vec![("q[a][b]".to_string(), "v".to_string())]);
    }

    #[test]
    fn deep_output_is_independent_of_insertion_order() {
        let first = object(vec![
            ("a", ParamValue::from("1")),
            ("b", ParamValue::from("2")),
        ]);
        let second = object(vec![
            ("b", ParamValue::from("2")),
            ("a", ParamValue::from("1")),
        ]);

        let mut left = serialize(&first, Some("q"), true).expect("serialize");
        let mut right = serialize(&second, Some("q"), true).expect("serialize");
        left.sort();
        right.sort();
        assert_eq!(left, right);
    }

    #[test]
    fn should_expand_unkeyed_object_under_property_names() {
        let params = object(vec![
            ("page", ParamValue::from(2)),
            ("size", ParamValue::from(50)),
        ]);
        let pairs = serialize(&params, None, false).expect("serialize");
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn object_keys_keep_insertion_order_not_alphabetical_order() {
        let filter = ParamValue::from(serde_json::json!({"zeta": 1, "alpha": 2}));

        let pairs = serialize(&filter, Some("filter"), false).expect("serialize");
        assert_eq!(
            pairs,
            vec![("filter".to_string(), r#"{"zeta":1,"alpha":2}"#.to_string())]
        );

        let pairs = serialize(&filter, Some("filter"), true).expect("serialize");
        assert_eq!(
            pairs,
            vec![
                ("filter[zeta]".to_string(), "1".to_string()),
                ("filter[alpha]".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn nested_object_without_key_collapses_under_its_property() {
        let params = object(vec![(
            "outer",
            object(vec![("inner", ParamValue::from("v"))]),
        )]);
        let pairs = serialize(&params, None, false).expect("serialize");
        assert_eq!(
            pairs,
            vec![("outer".to_string(), r#"{"inner":"v"}"#.to_string())]
        );
    }

    #[test]
    fn should_skip_null_properties_inside_objects() {
        let params = object(vec![
            ("present", ParamValue::from("yes")),
            ("absent", ParamValue::Null),
        ]);
        let pairs = serialize(&params, None, false).expect("serialize");
        assert_eq!(pairs, vec![("present".to_string(), "yes".to_string())]);
    }

    #[test]
    fn should_serialize_dates_inside_arrays() {
        let dates = ParamValue::Array(vec![
            ParamValue::Date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ParamValue::Date(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
        ]);
        let pairs = serialize(&dates, Some("days"), false).expect("serialize");
        assert_eq!(
            pairs,
            vec![
                ("days".to_string(), "2024-01-01T00:00:00.000Z".to_string()),
                ("days".to_string(), "2024-01-02T00:00:00.000Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ParamValue::from(Option::<i32>::None), ParamValue::Null);
        assert_eq!(ParamValue::from(Some("x")), ParamValue::from("x"));

        let uuid = Uuid::nil();
        assert_eq!(
            ParamValue::from(uuid),
            ParamValue::String("00000000-0000-0000-0000-000000000000".to_string())
        );

        let day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(ParamValue::from(day), ParamValue::String("2024-06-30".to_string()));
    }

    #[test]
    fn test_from_json_value_preserves_structure() {
        let json = serde_json::json!({"a": [1, 2], "b": {"c": true}});
        let value = ParamValue::from(json);
        let ParamValue::Object(entries) = &value else {
            panic!("expected an object");
        };
        assert!(matches!(entries.get("a"), Some(ParamValue::Array(_))));
        assert!(matches!(entries.get("b"), Some(ParamValue::Object(_))));
    }
}
