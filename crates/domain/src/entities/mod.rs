//! Domain entities - Requests, replies and the API records between them

mod query;
mod records;
mod relay_message;

pub use query::{MessageFields, Query, QueryParams};
pub use records::{
    Arrival, CalendarDay, Countdown, DayTypeFrequency, DirectionFrequency, LineDetail,
    LineSchedule, LineSummary, NO_ESTIMATE_SECONDS, NearbyStop, Record, RouteStop, StopLine,
    StopNode,
};
pub use relay_message::{RELAY_DESTINATION, RelayMessage};
