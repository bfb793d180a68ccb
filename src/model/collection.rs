use crate::api::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Render state of a fetched collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Truthiness of a JSON value the way the API's JavaScript clients see it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strips the optional pagination envelope.
///
/// A truthy `results` member wins; otherwise the whole body is the collection.
/// Anything that is not an array after that yields an empty collection.
pub fn unwrap_results(body: Value) -> Vec<Value> {
    let collection = match body {
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(results) if is_truthy(&results) => results,
            _ => Value::Object(envelope),
        },
        other => other,
    };

    match collection {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Unwraps and decodes a collection body into records.
pub fn decode_collection<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    unwrap_results(body)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|err| ApiError::Decode(err.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Team;
    use serde_json::json;

    #[test]
    fn bare_array() {
        let items = unwrap_results(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn paginated_envelope() {
        let items = unwrap_results(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        }));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn empty_results_array_is_still_the_collection() {
        let items = unwrap_results(json!({"count": 0, "results": []}));
        assert!(items.is_empty());
    }

    #[test]
    fn non_array_bodies_are_empty() {
        assert!(unwrap_results(json!({"detail": "nothing here"})).is_empty());
        assert!(unwrap_results(json!({"results": {"id": 1}})).is_empty());
        assert!(unwrap_results(json!("text")).is_empty());
        assert!(unwrap_results(json!(42)).is_empty());
        assert!(unwrap_results(Value::Null).is_empty());
    }

    #[test]
    fn falsy_results_fall_back_to_body() {
        assert!(unwrap_results(json!({"results": null})).is_empty());
        assert!(unwrap_results(json!({"results": 0})).is_empty());
        assert!(unwrap_results(json!({"results": ""})).is_empty());
    }

    #[test]
    fn decodes_records() {
        let teams: Vec<Team> = decode_collection(json!({
            "results": [
                {"id": 1, "name": "Team Marvel", "member_count": 5},
                {"id": 2, "name": "Team DC"}
            ]
        }))
        .unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].member_count(), 5);
        assert_eq!(teams[1].member_count(), 0);
    }

    #[test]
    fn malformed_record_is_a_decode_error() {
        let result: Result<Vec<Team>, _> = decode_collection(json!([{"id": "one"}]));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn loadable_defaults_to_loading() {
        let state: Loadable<Vec<Team>> = Loadable::default();
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);
    }
}
