//! Plain-text rendering of a board.

use std::fmt::Write;

use crate::board::BoardView;
use crate::flight::{Direction, AIRPORT_CODE};

/// Render `view` as an aligned table.
#[must_use]
pub fn render_table(view: &BoardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({AIRPORT_CODE})", view.title);
    if let Some(alert) = &view.alert_message {
        let _ = writeln!(out, "! {alert}");
    }
    let _ = writeln!(
        out,
        "Airlines: {}  [showing: {}]",
        view.airlines.join(" | "),
        view.airline_filter
    );
    out.push('\n');

    if !view.has_flights() {
        out.push_str("No flights to show.\n");
        return out;
    }

    let route_header = match view.direction {
        Direction::Arrivals => "FROM",
        Direction::Departures => "TO",
    };
    let header = [
        "TIME",
        "FLIGHT",
        "AIRLINE",
        route_header,
        "GATE",
        "TERMINAL",
        "STATUS",
    ];
    let rows: Vec<[String; 7]> = view
        .flights
        .iter()
        .map(|f| {
            [
                f.planned_time_display(),
                f.flight_number().to_string(),
                f.airline().to_string(),
                f.route_display().to_string(),
                f.gate().to_string(),
                f.terminal().to_string(),
                f.status().to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(&mut out, header.iter().copied(), &widths);
    for row in &rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
