//! API endpoint - Named operations of the EMT openbus service

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Named endpoints of the transit API
///
/// The table is wider than the set of queries answered today; the extra
/// entries keep lookup-by-name total over the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiEndpoint {
    BusCalendar,
    BusGroups,
    BusListLines,
    BusNodesLines,
    BusRouteLines,
    BusRouteLinesRoute,
    BusTimesLines,
    BusTimetableLines,
    GeoArriveStop,
    GeoGroups,
    GeoInfoLine,
    GeoInfoLineExtended,
    GeoStopsFromStop,
    GeoStopsLine,
    GeoStreet,
}

impl ApiEndpoint {
    /// Every endpoint in the table
    pub const ALL: [Self; 15] = [
        Self::BusCalendar,
        Self::BusGroups,
        Self::BusListLines,
        Self::BusNodesLines,
        Self::BusRouteLines,
        Self::BusRouteLinesRoute,
        Self::BusTimesLines,
        Self::BusTimetableLines,
        Self::GeoArriveStop,
        Self::GeoGroups,
        Self::GeoInfoLine,
        Self::GeoInfoLineExtended,
        Self::GeoStopsFromStop,
        Self::GeoStopsLine,
        Self::GeoStreet,
    ];

    /// Stable name used for lookup and logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BusCalendar => "bus_calendar",
            Self::BusGroups => "bus_groups",
            Self::BusListLines => "bus_list_lines",
            Self::BusNodesLines => "bus_nodes_lines",
            Self::BusRouteLines => "bus_route_lines",
            Self::BusRouteLinesRoute => "bus_route_lines_route",
            Self::BusTimesLines => "bus_times_lines",
            Self::BusTimetableLines => "bus_timetable_lines",
            Self::GeoArriveStop => "geo_arrive_stop",
            Self::GeoGroups => "geo_groups",
            Self::GeoInfoLine => "geo_info_line",
            Self::GeoInfoLineExtended => "geo_info_line_extended",
            Self::GeoStopsFromStop => "geo_stops_from_stop",
            Self::GeoStopsLine => "geo_stops_line",
            Self::GeoStreet => "geo_street",
        }
    }

    /// Whether the endpoint belongs to the `geo` family, which has no
    /// `resultCode` envelope
    #[must_use]
    pub const fn is_geo(&self) -> bool {
        matches!(
            self,
            Self::GeoArriveStop
                | Self::GeoGroups
                | Self::GeoInfoLine
                | Self::GeoInfoLineExtended
                | Self::GeoStopsFromStop
                | Self::GeoStopsLine
                | Self::GeoStreet
        )
    }

    /// Look up an endpoint by name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownEndpoint`] if the name is not in the table.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == name)
            .ok_or_else(|| DomainError::UnknownEndpoint(name.to_string()))
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
