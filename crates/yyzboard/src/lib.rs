//! `yyzboard` - Arrivals and departures boards for Toronto Pearson
//!
//! This library fetches flights from a third-party API, normalizes whatever
//! JSON shape comes back into [`Flight`] records, and assembles a filterable
//! board with a featured airline pinned to the top. Sample flights stand in
//! whenever live data cannot be used.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod board;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod flight;
pub mod logging;
pub mod normalize;

pub use board::{assemble_board, BoardService, BoardView};
pub use client::{FetchResult, FlightClient, FlightSource};
pub use config::Config;
pub use error::{Error, Result};
pub use fallback::sample_flights;
pub use flight::{Direction, Flight};
pub use logging::init_logging;
pub use normalize::normalize;
