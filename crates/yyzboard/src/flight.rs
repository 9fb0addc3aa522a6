//! Core flight types for yyzboard.
//!
//! This module defines the canonical flight record that every upstream shape
//! is normalized into, along with the display values derived from it.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// IATA code of the airport every board is for.
pub const AIRPORT_CODE: &str = "YYZ";

/// Airline pinned to the top of boards unless configured otherwise.
pub const FEATURED_AIRLINE: &str = "Porter Airlines";

/// Airline used when an upstream entry names none.
pub const UNKNOWN_AIRLINE: &str = "Unknown airline";

/// Shown when a flight has no scheduled time at all.
pub const TIME_TBD: &str = "TBD";

/// Naive date-time layouts accepted for scheduled times, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Time-of-day layouts accepted for scheduled times.
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Whether a flight arrives at or departs from the airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Flights landing at the airport.
    Arrivals,
    /// Flights leaving the airport.
    Departures,
}

impl Direction {
    /// The lowercase tag used on the wire and as a JSON key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arrivals => "arrivals",
            Self::Departures => "departures",
        }
    }

    /// Page title for a board in this direction.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Arrivals => "Arrivals",
            Self::Departures => "Departures",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text names neither direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}', expected 'arrivals' or 'departures'")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("arrivals") {
            Ok(Self::Arrivals)
        } else if trimmed.eq_ignore_ascii_case("departures") {
            Ok(Self::Departures)
        } else {
            Err(ParseDirectionError(s.to_string()))
        }
    }
}

/// One flight on a board.
///
/// String fields are never absent, only empty. The airline is never empty
/// and the direction is fixed when the record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    airline: String,
    flight_number: String,
    origin: String,
    destination: String,
    scheduled_time_raw: Option<String>,
    gate: String,
    status: String,
    terminal: String,
    direction: Direction,
}

impl Flight {
    /// Create a flight with every optional field empty.
    ///
    /// A blank airline becomes [`UNKNOWN_AIRLINE`].
    #[must_use]
    pub fn new(direction: Direction, airline: impl Into<String>) -> Self {
        let airline = airline.into();
        let airline = if airline.trim().is_empty() {
            UNKNOWN_AIRLINE.to_string()
        } else {
            airline
        };
        Self {
            airline,
            flight_number: String::new(),
            origin: String::new(),
            destination: String::new(),
            scheduled_time_raw: None,
            gate: String::new(),
            status: String::new(),
            terminal: String::new(),
            direction,
        }
    }

    /// Set the flight number.
    #[must_use]
    pub fn with_flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    /// Set the origin city or airport.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the destination city or airport.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the scheduled time exactly as the upstream sent it.
    #[must_use]
    pub fn with_scheduled_time(mut self, raw: Option<String>) -> Self {
        self.scheduled_time_raw = raw;
        self
    }

    /// Set the gate.
    #[must_use]
    pub fn with_gate(mut self, gate: impl Into<String>) -> Self {
        self.gate = gate.into();
        self
    }

    /// Set the status text.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the terminal.
    #[must_use]
    pub fn with_terminal(mut self, terminal: impl Into<String>) -> Self {
        self.terminal = terminal.into();
        self
    }

    /// Operating airline.
    #[must_use]
    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Flight number, possibly empty.
    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Where the flight comes from.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Where the flight goes.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Scheduled time as received, if any.
    #[must_use]
    pub fn scheduled_time_raw(&self) -> Option<&str> {
        self.scheduled_time_raw.as_deref()
    }

    /// Gate, possibly empty.
    #[must_use]
    pub fn gate(&self) -> &str {
        &self.gate
    }

    /// Status text, possibly empty.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Terminal, possibly empty.
    #[must_use]
    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    /// Direction the flight was fetched for.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Scheduled time as `HH:MM` in local time.
    ///
    /// Falls back to the raw text when it does not parse, and to
    /// [`TIME_TBD`] when there is no scheduled time.
    #[must_use]
    pub fn planned_time_display(&self) -> String {
        match self.scheduled_time_raw.as_deref() {
            None => TIME_TBD.to_string(),
            Some(raw) => parse_local_time(raw)
                .map_or_else(|| raw.to_string(), |time| time.format("%H:%M").to_string()),
        }
    }

    /// The other end of the route, as seen from the airport.
    ///
    /// Arrivals show the origin, departures the destination. Either falls
    /// back to the opposite field when blank.
    #[must_use]
    pub fn route_display(&self) -> &str {
        let (preferred, other) = match self.direction {
            Direction::Arrivals => (&self.origin, &self.destination),
            Direction::Departures => (&self.destination, &self.origin),
        };
        if preferred.trim().is_empty() {
            other
        } else {
            preferred
        }
    }
}

/// Parse an upstream scheduled time into a local time of day.
fn parse_local_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).time());
    }

    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.time());
    }

    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return Some(NaiveTime::MIN);
    }

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

impl Serialize for Flight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Flight", 11)?;
        state.serialize_field("airline", &self.airline)?;
        state.serialize_field("flight_number", &self.flight_number)?;
        state.serialize_field("origin", &self.origin)?;
        state.serialize_field("destination", &self.destination)?;
        state.serialize_field("scheduled_time", &self.scheduled_time_raw)?;
        state.serialize_field("planned_time", &self.planned_time_display())?;
        state.serialize_field("route", self.route_display())?;
        state.serialize_field("gate", &self.gate)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("terminal", &self.terminal)?;
        state.serialize_field("direction", &self.direction)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(raw: Option<&str>) -> Flight {
        Flight::new(Direction::Arrivals, "Air Canada").with_scheduled_time(raw.map(String::from))
    }

    #[test]
    fn test_direction_as_str_and_display() {
        assert_eq!(Direction::Arrivals.as_str(), "arrivals");
        assert_eq!(Direction::Departures.to_string(), "departures");
        assert_eq!(Direction::Arrivals.title(), "Arrivals");
        assert_eq!(Direction::Departures.title(), "Departures");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("arrivals".parse::<Direction>(), Ok(Direction::Arrivals));
        assert_eq!(" Departures ".parse::<Direction>(), Ok(Direction::Departures));
        assert_eq!("ARRIVALS".parse::<Direction>(), Ok(Direction::Arrivals));

        let err = "sideways".parse::<Direction>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_direction_serde_tag() {
        let json = serde_json::to_string(&Direction::Departures).unwrap();
        assert_eq!(json, "\"departures\"");
    }

    #[test]
    fn test_new_defaults() {
        let flight = Flight::new(Direction::Departures, "WestJet");
        assert_eq!(flight.airline(), "WestJet");
        assert_eq!(flight.flight_number(), "");
        assert_eq!(flight.origin(), "");
        assert_eq!(flight.destination(), "");
        assert_eq!(flight.gate(), "");
        assert_eq!(flight.status(), "");
        assert_eq!(flight.terminal(), "");
        assert!(flight.scheduled_time_raw().is_none());
        assert_eq!(flight.direction(), Direction::Departures);
    }

    #[test]
    fn test_blank_airline_becomes_unknown() {
        assert_eq!(Flight::new(Direction::Arrivals, "").airline(), UNKNOWN_AIRLINE);
        assert_eq!(Flight::new(Direction::Arrivals, "  ").airline(), UNKNOWN_AIRLINE);
    }

    #[test]
    fn test_planned_time_iso() {
        assert_eq!(
            scheduled(Some("2024-06-30T14:15:00")).planned_time_display(),
            "14:15"
        );
    }

    #[test]
    fn test_planned_time_other_layouts() {
        assert_eq!(
            scheduled(Some("2024-06-30T09:05:30.250")).planned_time_display(),
            "09:05"
        );
        assert_eq!(
            scheduled(Some("2024-06-30 18:45")).planned_time_display(),
            "18:45"
        );
        assert_eq!(scheduled(Some("2024-06-30")).planned_time_display(), "00:00");
        assert_eq!(scheduled(Some("07:30")).planned_time_display(), "07:30");
    }

    #[test]
    fn test_planned_time_absent_is_tbd() {
        assert_eq!(scheduled(None).planned_time_display(), "TBD");
    }

    #[test]
    fn test_planned_time_unparseable_is_raw() {
        assert_eq!(
            scheduled(Some("about noon")).planned_time_display(),
            "about noon"
        );
        assert_eq!(scheduled(Some("")).planned_time_display(), "");
    }

    #[test]
    fn test_route_display_arrivals() {
        let flight = Flight::new(Direction::Arrivals, "Porter Airlines")
            .with_origin("Ottawa")
            .with_destination("Toronto");
        assert_eq!(flight.route_display(), "Ottawa");

        let flight = Flight::new(Direction::Arrivals, "Porter Airlines").with_destination("Toronto");
        assert_eq!(flight.route_display(), "Toronto");
    }

    #[test]
    fn test_route_display_departures() {
        let flight = Flight::new(Direction::Departures, "WestJet")
            .with_origin("Toronto")
            .with_destination("Calgary");
        assert_eq!(flight.route_display(), "Calgary");

        let flight = Flight::new(Direction::Departures, "WestJet")
            .with_origin("Toronto")
            .with_destination("   ");
        assert_eq!(flight.route_display(), "Toronto");
    }

    #[test]
    fn test_serialize_includes_display_fields() {
        let flight = Flight::new(Direction::Arrivals, "Air Canada")
            .with_flight_number("AC 789")
            .with_origin("Vancouver")
            .with_scheduled_time(Some("2024-06-30T15:05:00".to_string()));
        let value = serde_json::to_value(&flight).unwrap();

        assert_eq!(value["airline"], "Air Canada");
        assert_eq!(value["planned_time"], "15:05");
        assert_eq!(value["route"], "Vancouver");
        assert_eq!(value["direction"], "arrivals");
    }
}
