//! Application services - Use case implementations

mod catalog;
mod handler_registry;
mod locale_resolver;
mod normalizer;
mod query_service;
mod reply_formatter;
mod vocabulary;

pub use catalog::{Catalog, MessageKey};
pub use handler_registry::{HandlerRegistry, QueryHandler, Renderer, api_params, default_handlers};
pub use locale_resolver::LocaleResolver;
pub use normalizer::{Envelope, NormalizeError, normalize};
pub use query_service::QueryService;
pub use reply_formatter::{
    NO_ESTIMATE_TEXT, format_arrivals, format_calendar, format_countdown, format_error,
    format_line_detail, format_line_list, format_line_schedule, format_nearby_stops,
    format_outcome, format_route_stops, format_stop_list,
};
pub use vocabulary::{day_of_week, day_type};
