//! Query kind - The eight questions the bot can answer

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Supported query kinds, one per chat-relay message tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Day-of-week and day-type calendar for a date range
    Calendar,
    /// Line labels and terminals
    LineList,
    /// Stop names and the lines serving them
    StopList,
    /// Ordered stops of a single line
    RouteStops,
    /// First and last services of a single line
    LineSchedule,
    /// Real-time arrivals at a stop
    StopArrivals,
    /// Headers, incidents and frequencies of a line
    LineDetail,
    /// Stops within a radius of a stop
    NearbyStops,
}

impl QueryKind {
    /// Every query kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Calendar,
        Self::LineList,
        Self::StopList,
        Self::RouteStops,
        Self::LineSchedule,
        Self::StopArrivals,
        Self::LineDetail,
        Self::NearbyStops,
    ];

    /// Chat-relay message tag for this kind
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Calendar => "bus-calendar",
            Self::LineList => "bus-list-lines",
            Self::StopList => "bus-nodes-lines",
            Self::RouteStops => "bus-route-lines",
            Self::LineSchedule => "bus-times-lines",
            Self::StopArrivals => "geo-arrive-stop",
            Self::LineDetail => "geo-info-line-extended",
            Self::NearbyStops => "geo-stops-from-stop",
        }
    }

    /// Parse a chat-relay message tag
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownQueryTag`] if no kind uses the tag.
    pub fn from_tag(tag: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag.trim())
            .ok_or_else(|| DomainError::UnknownQueryTag(tag.to_string()))
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
