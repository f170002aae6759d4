//! Reply message formatting
//!
//! Pure functions rendering normalized records into chat replies. Each
//! record becomes one block, blocks are concatenated in input order, and an
//! empty record list renders as an empty reply.

use domain::{
    Arrival, CalendarDay, Countdown, LineDetail, LineSchedule, LineSummary, NearbyStop, RouteStop,
    StopNode,
};

use super::catalog::{Catalog, MessageKey};
use super::normalizer::NormalizeError;
use super::vocabulary::{day_of_week, day_type};

/// Countdown text used when the service has no estimate
pub const NO_ESTIMATE_TEXT: &str = "+20 mins";

// ── Errors ──────────────────────────────────────────────────────

/// Render a normalization failure
///
/// API errors are shown verbatim after `ERROR: `; malformed responses get
/// the localized "Incorrect values" message.
#[must_use]
pub fn format_error(error: &NormalizeError, catalog: &Catalog) -> String {
    match error {
        NormalizeError::Api { description, .. } => format!("ERROR: {description}"),
        NormalizeError::Malformed(_) => catalog.text(MessageKey::IncorrectValues).to_string(),
    }
}

/// Render either the records or the error that replaced them
pub fn format_outcome<T>(
    outcome: &Result<Vec<T>, NormalizeError>,
    catalog: &Catalog,
    render: fn(&[T], &Catalog) -> String,
) -> String {
    match outcome {
        Ok(records) => render(records, catalog),
        Err(e) => format_error(e, catalog),
    }
}

// ── Bus family ──────────────────────────────────────────────────

/// `- Monday 01/02/2024: Labour day`
#[must_use]
pub fn format_calendar(days: &[CalendarDay], catalog: &Catalog) -> String {
    let mut msg = String::new();
    for day in days {
        msg.push_str(&format!(
            "- {} {}: {}\n",
            day_of_week(&day.day_of_week, catalog),
            day.date_only(),
            day_type(&day.day_type, catalog)
        ));
    }
    msg
}

/// `- Line 27: EMBAJADORES - PLAZA CASTILLA`
#[must_use]
pub fn format_line_list(lines: &[LineSummary], catalog: &Catalog) -> String {
    let label = catalog.text(MessageKey::Line);
    let mut msg = String::new();
    for line in lines {
        msg.push_str(&format!(
            "- {label} {}: {} - {}\n",
            line.label, line.name_a, line.name_b
        ));
    }
    msg
}

/// `- 71: SOL (27/1 5/2)`
#[must_use]
pub fn format_stop_list(stops: &[StopNode], _catalog: &Catalog) -> String {
    let mut msg = String::new();
    for stop in stops {
        msg.push_str(&format!(
            "- {}: {} ({})\n",
            stop.node,
            stop.name,
            stop.line_labels().join(" ")
        ));
    }
    msg
}

/// Stop name, node and distances, one blank line after each stop
#[must_use]
pub fn format_route_stops(stops: &[RouteStop], catalog: &Catalog) -> String {
    let mut msg = String::new();
    for stop in stops {
        msg.push_str(&format!("- {} ({})\n", stop.name, stop.node));
        msg.push_str(&format!(
            "{}: {}\n",
            catalog.text(MessageKey::DistanceFromOrigin),
            stop.distance
        ));
        msg.push_str(&format!(
            "{}: {}\n\n",
            catalog.text(MessageKey::DistanceFromPreviousStop),
            stop.distance_previous_stop
        ));
    }
    msg
}

/// First and last services in both directions, one blank line after each
#[must_use]
pub fn format_line_schedule(schedules: &[LineSchedule], catalog: &Catalog) -> String {
    let mut msg = String::new();
    for s in schedules {
        msg.push_str(&format!(
            "- {} {} ({}) [{} - {}]\n",
            catalog.text(MessageKey::Line),
            s.line,
            day_type(&s.type_day, catalog),
            s.date_first,
            s.date_end
        ));
        for (key, time) in [
            (MessageKey::FirstServiceA, &s.time_first_a),
            (MessageKey::LastServiceA, &s.time_end_a),
            (MessageKey::FirstServiceB, &s.time_first_b),
            (MessageKey::LastServiceB, &s.time_end_b),
        ] {
            msg.push_str(&format!("{}: {time}\n", catalog.text(key)));
        }
        msg.push('\n');
    }
    msg
}

// ── Geo family ──────────────────────────────────────────────────

/// `2 mins 5 sec`, or [`NO_ESTIMATE_TEXT`] for the sentinel
#[must_use]
pub fn format_countdown(countdown: Countdown) -> String {
    match countdown {
        Countdown::Estimate { minutes, seconds } => format!("{minutes} mins {seconds} sec"),
        Countdown::NoEstimate => NO_ESTIMATE_TEXT.to_string(),
    }
}

/// Line, destination, countdown and distance, one blank line after each bus
#[must_use]
pub fn format_arrivals(arrivals: &[Arrival], catalog: &Catalog) -> String {
    let mut msg = String::new();
    for a in arrivals {
        msg.push_str(&format!("- {}: {}\n", a.line_id, a.destination));
        msg.push_str(&format!(
            "{}: {}\n",
            catalog.text(MessageKey::TimeLeft),
            format_countdown(a.countdown())
        ));
        msg.push_str(&format!(
            "{}: {} m\n\n",
            catalog.text(MessageKey::BusDistance),
            a.bus_distance
        ));
    }
    msg
}

/// Line header and incidents, then one block per day type
#[must_use]
pub fn format_line_detail(lines: &[LineDetail], catalog: &Catalog) -> String {
    let mut msg = String::new();
    for line in lines {
        msg.push_str(&format!(
            "{} {}: {} - {}\n",
            catalog.text(MessageKey::Line),
            line.label,
            line.header_a,
            line.header_b
        ));
        msg.push_str(&format!(
            "{}: {}\n",
            catalog.text(MessageKey::Incidents),
            line.incidents
        ));
        for day in line.day_type.as_slice() {
            msg.push_str(&format!("- {}\n", day.day_type_id));
            msg.push_str(&format!(
                "{}: {}\n",
                catalog.text(MessageKey::Direction1),
                day.direction1.frequency_description
            ));
            msg.push_str(&format!(
                "{}: {}\n\n",
                catalog.text(MessageKey::Direction2),
                day.direction2.frequency_description
            ));
        }
    }
    msg
}

/// Stop name, id, address and the labels of the lines serving it
#[must_use]
pub fn format_nearby_stops(stops: &[NearbyStop], catalog: &Catalog) -> String {
    let mut msg = String::new();
    for stop in stops {
        msg.push_str(&format!(
            "- {} ({}): {}\n",
            stop.name, stop.stop_id, stop.postal_address
        ));
        let labels: Vec<&str> = stop
            .line
            .as_slice()
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        msg.push_str(&format!(
            "{}: {}\n",
            catalog.text(MessageKey::Lines),
            labels.join(" ")
        ));
    }
    msg
}
