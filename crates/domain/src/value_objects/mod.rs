//! Value Objects - Immutable, identity-less domain primitives

mod api_endpoint;
mod day_codes;
mod id_list;
mod locale;
mod one_or_many;
mod query_kind;
mod transit_date;

pub use api_endpoint::ApiEndpoint;
pub use day_codes::{DayOfWeek, DayType};
pub use id_list::IdList;
pub use locale::Locale;
pub use one_or_many::OneOrMany;
pub use query_kind::QueryKind;
pub use transit_date::TransitDate;
