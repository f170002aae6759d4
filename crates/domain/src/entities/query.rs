//! Query entity - One incoming chat-relay request

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{IdList, QueryKind, TransitDate};

/// Named string fields of an incoming chat-relay message
pub type MessageFields = HashMap<String, String>;

/// Kind-specific query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryParams {
    Calendar {
        start: TransitDate,
        end: TransitDate,
    },
    LineList {
        date: TransitDate,
        lines: IdList,
    },
    StopList {
        stops: IdList,
    },
    RouteStops {
        date: TransitDate,
        line: String,
    },
    LineSchedule {
        date: TransitDate,
        line: String,
    },
    StopArrivals {
        stop: String,
    },
    LineDetail {
        date: TransitDate,
        line: String,
    },
    NearbyStops {
        stop: String,
        /// Search radius in meters
        radius: u32,
    },
}

impl QueryParams {
    /// The query kind these parameters belong to
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        match self {
            Self::Calendar { .. } => QueryKind::Calendar,
            Self::LineList { .. } => QueryKind::LineList,
            Self::StopList { .. } => QueryKind::StopList,
            Self::RouteStops { .. } => QueryKind::RouteStops,
            Self::LineSchedule { .. } => QueryKind::LineSchedule,
            Self::StopArrivals { .. } => QueryKind::StopArrivals,
            Self::LineDetail { .. } => QueryKind::LineDetail,
            Self::NearbyStops { .. } => QueryKind::NearbyStops,
        }
    }

    /// Read the parameters of `kind` from message fields
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or a value does not
    /// parse (dates, radius).
    pub fn from_fields(kind: QueryKind, fields: &MessageFields) -> Result<Self, DomainError> {
        let params = match kind {
            QueryKind::Calendar => Self::Calendar {
                start: date_field(fields, "sdate")?,
                end: date_field(fields, "edate")?,
            },
            QueryKind::LineList => Self::LineList {
                date: date_field(fields, "date")?,
                lines: IdList::parse(optional_field(fields, "lines").unwrap_or_default()),
            },
            QueryKind::StopList => Self::StopList {
                stops: IdList::parse(optional_field(fields, "stops").unwrap_or_default()),
            },
            QueryKind::RouteStops => Self::RouteStops {
                date: date_field(fields, "date")?,
                line: required_field(fields, "line")?.to_string(),
            },
            QueryKind::LineSchedule => Self::LineSchedule {
                date: date_field(fields, "date")?,
                line: required_field(fields, "line")?.to_string(),
            },
            QueryKind::StopArrivals => Self::StopArrivals {
                stop: required_field(fields, "stop")?.to_string(),
            },
            QueryKind::LineDetail => Self::LineDetail {
                date: date_field(fields, "date")?,
                line: required_field(fields, "line")?.to_string(),
            },
            QueryKind::NearbyStops => Self::NearbyStops {
                stop: required_field(fields, "stop")?.to_string(),
                radius: radius_field(fields)?,
            },
        };
        Ok(params)
    }
}

/// An incoming request: who asked, where to answer, and what
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Sender identity; no reply is sent without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    /// Destination-channel hint passed back as `relayto`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Kind-specific parameters
    pub params: QueryParams,
}

impl Query {
    /// Create a query
    #[must_use]
    pub fn new(sender: Option<String>, src: Option<String>, params: QueryParams) -> Self {
        Self {
            sender: sender.filter(|s| !s.trim().is_empty()),
            src: src.filter(|s| !s.trim().is_empty()),
            params,
        }
    }

    /// Parse a tagged chat-relay message
    ///
    /// The `tag` field selects the kind; `sender` and `src` are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is missing or unknown, or the kind's
    /// parameters are invalid.
    pub fn from_fields(fields: &MessageFields) -> Result<Self, DomainError> {
        let kind = QueryKind::from_tag(required_field(fields, "tag")?)?;
        Self::from_kind_fields(kind, fields)
    }

    /// Parse a message whose kind is already known
    ///
    /// # Errors
    ///
    /// Returns an error if the kind's parameters are invalid.
    pub fn from_kind_fields(kind: QueryKind, fields: &MessageFields) -> Result<Self, DomainError> {
        let params = QueryParams::from_fields(kind, fields)?;
        Ok(Self::new(
            fields.get("sender").cloned(),
            fields.get("src").cloned(),
            params,
        ))
    }

    /// The query kind
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        self.params.kind()
    }
}

fn optional_field<'a>(fields: &'a MessageFields, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn required_field<'a>(fields: &'a MessageFields, name: &str) -> Result<&'a str, DomainError> {
    optional_field(fields, name).ok_or_else(|| DomainError::missing(name))
}

fn date_field(fields: &MessageFields, name: &str) -> Result<TransitDate, DomainError> {
    TransitDate::parse(required_field(fields, name)?)
}

fn radius_field(fields: &MessageFields) -> Result<u32, DomainError> {
    let raw = required_field(fields, "radius")?;
    raw.parse().map_err(|_| {
        DomainError::ValidationError(format!("radius must be a whole number of meters, got {raw}"))
    })
}
