//! Normalization of upstream JSON into flight records.
//!
//! The provider's schema is not stable, so nothing here assumes a shape
//! beyond the candidate keys below. Each canonical field has an ordered list
//! of source keys; the first one holding a string wins and anything else
//! (missing, null, numbers, objects) counts as absent.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::fallback::sample_flights;
use crate::flight::{Direction, Flight, UNKNOWN_AIRLINE};

const AIRLINE_KEYS: &[&str] = &["airline", "airlineName"];
const FLIGHT_NUMBER_KEYS: &[&str] = &["flightNumber", "flight"];
const DESTINATION_KEYS: &[&str] = &["destination", "arrival", "arrives"];
const ORIGIN_KEYS: &[&str] = &["origin", "departure", "departs"];
const SCHEDULED_KEYS: &[&str] = &["scheduledTime", "scheduled", "time"];
const GATE_KEYS: &[&str] = &["gate"];
const STATUS_KEYS: &[&str] = &["status"];
const TERMINAL_KEYS: &[&str] = &["terminal"];

/// Key that wraps the flight list in some responses.
const DATA_KEY: &str = "data";

/// Where the flight list was found in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The root is the list.
    BareArray,
    /// `{"data": [...]}`.
    DataArray,
    /// `{"arrivals": [...]}` or `{"departures": [...]}`.
    DirectionArray,
}

/// Locate the list of raw flight entries in `root`.
///
/// Shapes are tried in a fixed order and the first match wins. `None` means
/// no known shape matched.
#[must_use]
pub fn extract_entries(root: &Value, direction: Direction) -> Option<(ResponseShape, &[Value])> {
    if let Value::Array(items) = root {
        return Some((ResponseShape::BareArray, items.as_slice()));
    }

    let object = root.as_object()?;
    if let Some(Value::Array(items)) = object.get(DATA_KEY) {
        return Some((ResponseShape::DataArray, items.as_slice()));
    }
    if let Some(Value::Array(items)) = object.get(direction.as_str()) {
        return Some((ResponseShape::DirectionArray, items.as_slice()));
    }

    None
}

/// Turn an upstream response into flight records.
///
/// Never fails: an unknown shape or an empty list yields the sample flights
/// for `direction`, and entries missing fields get defaults.
#[must_use]
pub fn normalize(root: &Value, direction: Direction) -> Vec<Flight> {
    match extract_entries(root, direction) {
        Some((shape, items)) if !items.is_empty() => {
            debug!(?shape, count = items.len(), %direction, "extracted flight entries");
            items.iter().map(|item| map_entry(item, direction)).collect()
        }
        Some((shape, _)) => {
            debug!(?shape, %direction, "flight list is empty, using sample flights");
            sample_flights(direction)
        }
        None => {
            debug!(%direction, "no flight list in response, using sample flights");
            sample_flights(direction)
        }
    }
}

/// Map one raw entry onto a flight record.
///
/// Non-object entries produce a record with every field defaulted.
#[must_use]
pub fn map_entry(item: &Value, direction: Direction) -> Flight {
    let Some(fields) = item.as_object() else {
        trace!(%direction, "flight entry is not an object");
        return Flight::new(direction, UNKNOWN_AIRLINE);
    };

    let text = |keys: &[&str]| first_string(fields, keys).unwrap_or_default();

    Flight::new(
        direction,
        first_string(fields, AIRLINE_KEYS).unwrap_or(UNKNOWN_AIRLINE),
    )
    .with_flight_number(text(FLIGHT_NUMBER_KEYS))
    .with_destination(text(DESTINATION_KEYS))
    .with_origin(text(ORIGIN_KEYS))
    .with_scheduled_time(first_string(fields, SCHEDULED_KEYS).map(str::to_string))
    .with_gate(text(GATE_KEYS))
    .with_status(text(STATUS_KEYS))
    .with_terminal(text(TERMINAL_KEYS))
}

/// First value under `keys` that is a JSON string.
fn first_string<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
}
