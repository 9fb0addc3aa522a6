//! Board assembly: airline list, filtering and display order.
//!
//! Everything here except [`BoardService::board`] is pure, so boards for
//! concurrent requests can be built in parallel without coordination.

use std::collections::HashSet;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::client::{FetchResult, FlightSource};
use crate::error::Result;
use crate::flight::{Direction, Flight, FEATURED_AIRLINE};

/// Filter value meaning "every airline".
pub const ALL_AIRLINES: &str = "All";

/// Everything needed to render one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Page title.
    pub title: String,
    /// Which board this is.
    pub direction: Direction,
    /// The filter actually applied; [`ALL_AIRLINES`] when none was asked for.
    pub airline_filter: String,
    /// Filter choices: "All", the featured airline, then the rest A-Z.
    pub airlines: Vec<String>,
    /// Flights in display order.
    pub flights: Vec<Flight>,
    /// Why sample data is shown, if it is.
    pub alert_message: Option<String>,
    /// The airline pinned to the top.
    pub featured_airline: String,
}

impl BoardView {
    /// Whether there is anything to show after filtering.
    #[must_use]
    pub fn has_flights(&self) -> bool {
        !self.flights.is_empty()
    }
}

/// Build a board with the default featured airline.
#[must_use]
pub fn assemble_board(
    result: &FetchResult,
    direction: Direction,
    title: &str,
    airline_filter: Option<&str>,
) -> BoardView {
    assemble_board_featuring(result, direction, title, airline_filter, FEATURED_AIRLINE)
}

/// Build a board with `featured` pinned to the top.
#[must_use]
pub fn assemble_board_featuring(
    result: &FetchResult,
    direction: Direction,
    title: &str,
    airline_filter: Option<&str>,
    featured: &str,
) -> BoardView {
    let airlines = airline_choices(result.flights(), featured);

    let airline_filter = airline_filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(ALL_AIRLINES)
        .to_string();
    let show_all = same_airline(&airline_filter, ALL_AIRLINES);

    let mut flights: Vec<Flight> = result
        .flights()
        .iter()
        .filter(|f| show_all || same_airline(f.airline(), &airline_filter))
        .cloned()
        .collect();
    sort_for_display(&mut flights, featured);

    info!(
        %direction,
        filter = %airline_filter,
        shown = flights.len(),
        total = result.flights().len(),
        sample_data = result.is_fallback(),
        "assembled board"
    );

    BoardView {
        title: title.to_string(),
        direction,
        airline_filter,
        airlines,
        flights,
        alert_message: result.error().map(str::to_string),
        featured_airline: featured.to_string(),
    }
}

/// Distinct airlines for the filter list.
///
/// Names are deduplicated and sorted ignoring case (the first spelling seen
/// is kept). `featured` always sits right after [`ALL_AIRLINES`], whether or
/// not any flight carries it.
#[must_use]
pub fn airline_choices(flights: &[Flight], featured: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<&str> = flights
        .iter()
        .map(Flight::airline)
        .filter(|airline| !airline.trim().is_empty())
        .filter(|airline| seen.insert(fold(airline)))
        .collect();
    names.sort_by_cached_key(|airline| fold(airline));

    let rest = names
        .into_iter()
        .filter(|airline| !same_airline(airline, featured))
        .map(str::to_string);

    [ALL_AIRLINES.to_string(), featured.to_string()]
        .into_iter()
        .chain(rest)
        .collect()
}

/// Featured airline first, then by airline, then by planned time.
///
/// The sort is stable, so flights that tie keep their upstream order.
pub fn sort_for_display(flights: &mut [Flight], featured: &str) {
    flights.sort_by_cached_key(|f| {
        (
            !same_airline(f.airline(), featured),
            fold(f.airline()),
            f.planned_time_display(),
        )
    });
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

fn same_airline(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold(a) == fold(b)
}

/// Fetches flights from a source and assembles a board, once per request.
#[derive(Debug)]
pub struct BoardService<S> {
    source: S,
    featured_airline: String,
}

impl<S: FlightSource> BoardService<S> {
    /// Create a service featuring the default airline.
    pub fn new(source: S) -> Self {
        Self {
            source,
            featured_airline: FEATURED_AIRLINE.to_string(),
        }
    }

    /// Feature a different airline.
    #[must_use]
    pub fn with_featured_airline(mut self, airline: impl Into<String>) -> Self {
        self.featured_airline = airline.into();
        self
    }

    /// The airline this service pins to the top.
    #[must_use]
    pub fn featured_airline(&self) -> &str {
        &self.featured_airline
    }

    /// Build the board for `direction`, optionally filtered to one airline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Cancelled`] if `cancel` fires during the
    /// fetch. No board is produced in that case.
    pub async fn board(
        &self,
        direction: Direction,
        airline: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<BoardView> {
        let result = self.source.fetch_flights(direction, cancel).await?;
        Ok(assemble_board_featuring(
            &result,
            direction,
            direction.title(),
            airline,
            &self.featured_airline,
        ))
    }
}
