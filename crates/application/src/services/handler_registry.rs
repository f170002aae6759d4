//! Query handler registry
//!
//! Maps every [`QueryKind`] to the endpoint it calls, where its records live
//! in the response, and how they are rendered. Built once at startup.

use std::collections::HashMap;
use std::fmt;

use domain::{ApiEndpoint, Locale, QueryKind, QueryParams};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::catalog::Catalog;
use super::normalizer::{Envelope, normalize};
use super::reply_formatter::{
    format_arrivals, format_calendar, format_line_detail, format_line_list, format_line_schedule,
    format_nearby_stops, format_outcome, format_route_stops, format_stop_list,
};
use crate::error::ApplicationError;
use crate::ports::ApiParams;

/// Normalize a raw body and render it as a reply
pub type Renderer = fn(&Value, &str, Envelope, &Catalog) -> String;

/// Everything needed to answer one query kind
#[derive(Clone, Copy)]
pub struct QueryHandler {
    pub kind: QueryKind,
    pub endpoint: ApiEndpoint,
    /// Response field holding the records
    pub payload_field: &'static str,
    pub envelope: Envelope,
    renderer: Renderer,
}

impl fmt::Debug for QueryHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryHandler")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("payload_field", &self.payload_field)
            .field("envelope", &self.envelope)
            .finish_non_exhaustive()
    }
}

impl QueryHandler {
    /// Create a handler
    #[must_use]
    pub const fn new(
        kind: QueryKind,
        endpoint: ApiEndpoint,
        payload_field: &'static str,
        envelope: Envelope,
        renderer: Renderer,
    ) -> Self {
        Self {
            kind,
            endpoint,
            payload_field,
            envelope,
            renderer,
        }
    }

    /// Render the reply for a raw response body
    #[must_use]
    pub fn render(&self, raw: &Value, catalog: &Catalog) -> String {
        (self.renderer)(raw, self.payload_field, self.envelope, catalog)
    }
}

fn render_as<T: DeserializeOwned>(
    raw: &Value,
    payload_field: &str,
    envelope: Envelope,
    catalog: &Catalog,
    format: fn(&[T], &Catalog) -> String,
) -> String {
    format_outcome(&normalize(raw, payload_field, envelope), catalog, format)
}

/// The handler set for all eight query kinds
#[must_use]
pub fn default_handlers() -> Vec<QueryHandler> {
    vec![
        QueryHandler::new(
            QueryKind::Calendar,
            ApiEndpoint::BusCalendar,
            "resultValues",
            Envelope::ResultCode,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_calendar),
        ),
        QueryHandler::new(
            QueryKind::LineList,
            ApiEndpoint::BusListLines,
            "resultValues",
            Envelope::ResultCode,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_line_list),
        ),
        QueryHandler::new(
            QueryKind::StopList,
            ApiEndpoint::BusNodesLines,
            "resultValues",
            Envelope::ResultCode,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_stop_list),
        ),
        QueryHandler::new(
            QueryKind::RouteStops,
            ApiEndpoint::BusRouteLines,
            "resultValues",
            Envelope::ResultCode,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_route_stops),
        ),
        QueryHandler::new(
            QueryKind::LineSchedule,
            ApiEndpoint::BusTimesLines,
            "resultValues",
            Envelope::ResultCode,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_line_schedule),
        ),
        QueryHandler::new(
            QueryKind::StopArrivals,
            ApiEndpoint::GeoArriveStop,
            "arrives",
            Envelope::Geo,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_arrivals),
        ),
        QueryHandler::new(
            QueryKind::LineDetail,
            ApiEndpoint::GeoInfoLineExtended,
            "Line",
            Envelope::Geo,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_line_detail),
        ),
        QueryHandler::new(
            QueryKind::NearbyStops,
            ApiEndpoint::GeoStopsFromStop,
            "stops",
            Envelope::Geo,
            |raw, field, env, catalog| render_as(raw, field, env, catalog, format_nearby_stops),
        ),
    ]
}

/// Request parameters for a query, in wire names
///
/// Geo endpoints localize server-side and receive the locale as
/// `cultureInfo`.
#[must_use]
pub fn api_params(params: &QueryParams, locale: Locale) -> ApiParams {
    let pairs: Vec<(&str, String)> = match params {
        QueryParams::Calendar { start, end } => vec![
            ("SelectDateBegin", start.to_api_string()),
            ("SelectDateEnd", end.to_api_string()),
        ],
        QueryParams::LineList { date, lines } => vec![
            ("SelectDate", date.to_api_string()),
            ("Lines", lines.to_api_string()),
        ],
        QueryParams::StopList { stops } => vec![("Nodes", stops.to_api_string())],
        QueryParams::RouteStops { date, line } | QueryParams::LineSchedule { date, line } => vec![
            ("SelectDate", date.to_api_string()),
            ("Lines", line.clone()),
        ],
        QueryParams::StopArrivals { stop } => vec![
            ("idStop", stop.clone()),
            ("cultureInfo", locale.api_code().to_string()),
        ],
        QueryParams::LineDetail { date, line } => vec![
            ("fecha", date.to_api_string()),
            ("line", line.clone()),
            ("cultureInfo", locale.api_code().to_string()),
        ],
        QueryParams::NearbyStops { stop, radius } => vec![
            ("idStop", stop.clone()),
            ("Radius", radius.to_string()),
            ("cultureInfo", locale.api_code().to_string()),
        ],
    };
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Exactly one handler per query kind
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<QueryKind, QueryHandler>,
}

impl HandlerRegistry {
    /// Registry with the built-in handlers
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the built-in set is incomplete.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::from_handlers(default_handlers())
    }

    /// Build a registry, checking that every kind is covered exactly once
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] on a duplicate or missing kind.
    pub fn from_handlers(
        handlers: impl IntoIterator<Item = QueryHandler>,
    ) -> Result<Self, ApplicationError> {
        let mut map = HashMap::new();
        for handler in handlers {
            if map.insert(handler.kind, handler).is_some() {
                return Err(ApplicationError::Configuration(format!(
                    "duplicate handler for {}",
                    handler.kind
                )));
            }
        }

        let missing: Vec<&str> = QueryKind::ALL
            .iter()
            .filter(|kind| !map.contains_key(*kind))
            .map(|kind| kind.tag())
            .collect();
        if !missing.is_empty() {
            return Err(ApplicationError::Configuration(format!(
                "no handler for {}",
                missing.join(", ")
            )));
        }

        Ok(Self { handlers: map })
    }

    /// The handler for `kind`
    ///
    /// # Errors
    ///
    /// Unreachable for a registry built through [`Self::from_handlers`].
    pub fn get(&self, kind: QueryKind) -> Result<&QueryHandler, ApplicationError> {
        self.handlers
            .get(&kind)
            .ok_or_else(|| ApplicationError::Internal(format!("no handler for {kind}")))
    }

    /// Number of registered handlers
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
