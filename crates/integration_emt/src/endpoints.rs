//! Endpoint path table

use domain::ApiEndpoint;

/// Path of an endpoint relative to the configured base URL
#[must_use]
pub const fn endpoint_path(endpoint: ApiEndpoint) -> &'static str {
    match endpoint {
        ApiEndpoint::BusCalendar => "bus/GetCalendar.php",
        ApiEndpoint::BusGroups => "bus/GetGroups.php",
        ApiEndpoint::BusListLines => "bus/GetListLines.php",
        ApiEndpoint::BusNodesLines => "bus/GetNodesLines.php",
        ApiEndpoint::BusRouteLines => "bus/GetRouteLines.php",
        ApiEndpoint::BusRouteLinesRoute => "bus/GetRouteLinesRoute.php",
        ApiEndpoint::BusTimesLines => "bus/GetTimesLines.php",
        ApiEndpoint::BusTimetableLines => "bus/GetTimeTableLines.php",
        ApiEndpoint::GeoArriveStop => "geo/GetArriveStop.php",
        ApiEndpoint::GeoGroups => "geo/GetGroups.php",
        ApiEndpoint::GeoInfoLine => "geo/GetInfoLine.php",
        ApiEndpoint::GeoInfoLineExtended => "geo/GetInfoLineExtend.php",
        ApiEndpoint::GeoStopsFromStop => "geo/GetStopsFromStop.php",
        ApiEndpoint::GeoStopsLine => "geo/GetStopsLine.php",
        ApiEndpoint::GeoStreet => "geo/GetStreet.php",
    }
}
