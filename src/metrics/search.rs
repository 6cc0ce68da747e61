//! Searches over normalized responses.
//!
//! These functions locate specific values inside event and engagement
//! payloads. They work on [`Node`] trees and use [`Node::one_or_many`] so an
//! object and a list of objects go through the same code.

use crate::metrics::errors::ShapeError;
use crate::metrics::node::{Node, NodeMap, Scalar};

/// Attribute naming an event in a summary.
pub const EVENT_NAME_ATTR: &str = "@eventName";
/// Attribute naming a parameter descriptor.
pub const NAME_ATTR: &str = "@name";
/// Attribute holding a descriptor's count.
pub const TOTAL_COUNT_ATTR: &str = "@totalCount";
/// Attribute holding an engagement metric's value.
pub const VALUE_ATTR: &str = "@value";

/// Finds the descriptor of `param_name` in an `Event` response.
///
/// Descriptors live under `parameters.key`, or under its `value` field when
/// it has one, as a single object or a list of objects. The first descriptor
/// whose `@name` equals `param_name` wins; the `value` fields of descriptors
/// hold parameter values and are not searched. Returns `None` if the path is
/// missing or nothing matches.
///
/// # Example
///
/// ```rust
/// use flurry_api::metrics::{find_parameter_in_event, flatten};
/// use serde_json::json;
///
/// let response = flatten(json!({
///     "parameters": {"key": {"@name": "Level", "@totalCount": 5}}
/// }));
///
/// let descriptor = find_parameter_in_event(&response, "Level").unwrap();
/// assert!(descriptor.contains_key("@totalCount"));
/// assert!(find_parameter_in_event(&response, "Score").is_none());
/// ```
#[must_use]
pub fn find_parameter_in_event<'a>(event_metrics: &'a Node, param_name: &str) -> Option<&'a NodeMap> {
    let key = event_metrics.pointer(&["parameters", "key"])?;
    let descriptors = key.get("value").unwrap_or(key);

    descriptors
        .one_or_many()?
        .into_iter()
        .filter_map(Node::as_map)
        .find(|descriptor| {
            descriptor
                .get(NAME_ATTR)
                .and_then(Node::as_scalar)
                .is_some_and(|name| name.matches(param_name))
        })
}

/// Returns the `@totalCount` of the descriptor of `param_name`, if any.
#[must_use]
pub fn parameter_total_count(event_metrics: &Node, param_name: &str) -> Option<Scalar> {
    find_parameter_in_event(event_metrics, param_name)?
        .get(TOTAL_COUNT_ATTR)
        .and_then(Node::as_scalar)
        .cloned()
}

/// Extracts the single value of a one-day engagement metric response.
///
/// The value is read from `day.@value` when a `day` wrapper is present, and
/// from the top-level `@value` otherwise.
///
/// # Errors
///
/// Returns [`ShapeError`] if the chosen location does not hold a scalar.
pub fn daily_value(response: &Node) -> Result<Scalar, ShapeError> {
    let (path, value) = match response.get("day") {
        Some(day) => ("day.@value", day.get(VALUE_ATTR)),
        None => (VALUE_ATTR, response.get(VALUE_ATTR)),
    };

    value
        .and_then(Node::as_scalar)
        .cloned()
        .ok_or_else(|| ShapeError::new(path, "expected a scalar"))
}

/// Returns the events listed in a `Summary` response, in encounter order.
///
/// The `event` field is a single object when the application has one event
/// and a list otherwise. A missing or `null` field means no events.
///
/// # Errors
///
/// Returns [`ShapeError`] if the response is not an object or `event` is a
/// non-null scalar.
pub fn summary_events(summary: &Node) -> Result<Vec<&Node>, ShapeError> {
    let map = summary
        .as_map()
        .ok_or_else(|| ShapeError::new("$", "expected an object"))?;

    match map.get("event") {
        None => Ok(Vec::new()),
        Some(node) if node.is_null() => Ok(Vec::new()),
        Some(node) => node
            .one_or_many()
            .map(|events| events.into_vec())
            .ok_or_else(|| ShapeError::new("event", "expected an object or a list")),
    }
}

/// Returns the `@eventName` of an event object.
///
/// # Errors
///
/// Returns [`ShapeError`] if the attribute is missing or not a string.
pub fn event_name(event: &Node) -> Result<&str, ShapeError> {
    event
        .get(EVENT_NAME_ATTR)
        .and_then(Node::as_str)
        .ok_or_else(|| ShapeError::new("event.@eventName", "expected a string"))
}
