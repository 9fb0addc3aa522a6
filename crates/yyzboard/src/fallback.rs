//! Sample flights shown when live data is unavailable.

use crate::flight::{Direction, Flight, FEATURED_AIRLINE};

/// City the sample flights fly to and from.
const HOME_CITY: &str = "Toronto";

/// One sample flight, independent of direction.
struct SampleFlight {
    airline: &'static str,
    arrival_number: &'static str,
    departure_number: &'static str,
    remote_city: &'static str,
    scheduled: &'static str,
    gate: &'static str,
    status: &'static str,
    terminal: &'static str,
}

const SAMPLE_FLIGHTS: [SampleFlight; 3] = [
    SampleFlight {
        airline: FEATURED_AIRLINE,
        arrival_number: "PD 123",
        departure_number: "PD 456",
        remote_city: "Ottawa",
        scheduled: "2024-06-30T14:15:00",
        gate: "B12",
        status: "On Time",
        terminal: "T1",
    },
    SampleFlight {
        airline: "Air Canada",
        arrival_number: "AC 789",
        departure_number: "AC 101",
        remote_city: "Vancouver",
        scheduled: "2024-06-30T15:05:00",
        gate: "D7",
        status: "Delayed",
        terminal: "T1",
    },
    SampleFlight {
        airline: "WestJet",
        arrival_number: "WS 222",
        departure_number: "WS 333",
        remote_city: "Calgary",
        scheduled: "2024-06-30T16:40:00",
        gate: "A2",
        status: "Boarding",
        terminal: "T3",
    },
];

/// The fixed sample board for `direction`.
///
/// Always the same three flights. Arrivals come from the remote city into
/// Toronto; departures go the other way.
#[must_use]
pub fn sample_flights(direction: Direction) -> Vec<Flight> {
    SAMPLE_FLIGHTS
        .iter()
        .map(|sample| {
            let (number, origin, destination) = match direction {
                Direction::Arrivals => (sample.arrival_number, sample.remote_city, HOME_CITY),
                Direction::Departures => (sample.departure_number, HOME_CITY, sample.remote_city),
            };
            Flight::new(direction, sample.airline)
                .with_flight_number(number)
                .with_origin(origin)
                .with_destination(destination)
                .with_scheduled_time(Some(sample.scheduled.to_string()))
                .with_gate(sample.gate)
                .with_status(sample.status)
                .with_terminal(sample.terminal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_flights_per_direction() {
        assert_eq!(sample_flights(Direction::Arrivals).len(), 3);
        assert_eq!(sample_flights(Direction::Departures).len(), 3);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            sample_flights(Direction::Arrivals),
            sample_flights(Direction::Arrivals)
        );
        assert_eq!(
            sample_flights(Direction::Departures),
            sample_flights(Direction::Departures)
        );
    }

    #[test]
    fn test_includes_featured_airline() {
        let flights = sample_flights(Direction::Arrivals);
        assert!(flights.iter().any(|f| f.airline() == FEATURED_AIRLINE));

        let airlines: Vec<&str> = flights.iter().map(Flight::airline).collect();
        assert_eq!(airlines, vec!["Porter Airlines", "Air Canada", "WestJet"]);
    }

    #[test]
    fn test_routes_reverse_between_directions() {
        let arrivals = sample_flights(Direction::Arrivals);
        let departures = sample_flights(Direction::Departures);

        for (arr, dep) in arrivals.iter().zip(&departures) {
            assert_eq!(arr.destination(), "Toronto");
            assert_eq!(dep.origin(), "Toronto");
            assert_eq!(arr.origin(), dep.destination());
            assert_eq!(arr.scheduled_time_raw(), dep.scheduled_time_raw());
        }
    }

    #[test]
    fn test_direction_is_carried() {
        assert!(sample_flights(Direction::Departures)
            .iter()
            .all(|f| f.direction() == Direction::Departures));
    }

    #[test]
    fn test_fixed_values() {
        let arrivals = sample_flights(Direction::Arrivals);
        let porter = &arrivals[0];
        assert_eq!(porter.flight_number(), "PD 123");
        assert_eq!(porter.gate(), "B12");
        assert_eq!(porter.status(), "On Time");
        assert_eq!(porter.terminal(), "T1");
        assert_eq!(porter.planned_time_display(), "14:15");

        let departures = sample_flights(Direction::Departures);
        assert_eq!(departures[1].flight_number(), "AC 101");
        assert_eq!(departures[2].route_display(), "Calgary");
        assert_eq!(departures[2].planned_time_display(), "16:40");
    }
}
