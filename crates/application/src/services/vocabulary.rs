//! Day-of-week and day-type vocabularies

use domain::{DayOfWeek, DayType};

use super::catalog::{Catalog, MessageKey};

/// Localized weekday name for an API day code
///
/// Unrecognised codes yield the catalog's "Unknown" placeholder.
#[must_use]
pub fn day_of_week(code: &str, catalog: &Catalog) -> &'static str {
    let key = match DayOfWeek::from_code(code) {
        Some(DayOfWeek::Monday) => MessageKey::Monday,
        Some(DayOfWeek::Tuesday) => MessageKey::Tuesday,
        Some(DayOfWeek::Wednesday) => MessageKey::Wednesday,
        Some(DayOfWeek::Thursday) => MessageKey::Thursday,
        Some(DayOfWeek::Friday) => MessageKey::Friday,
        Some(DayOfWeek::Saturday) => MessageKey::Saturday,
        Some(DayOfWeek::Sunday) => MessageKey::Sunday,
        None => MessageKey::Unknown,
    };
    catalog.text(key)
}

/// Localized day-type name for an API day-type code
///
/// Unrecognised codes yield the catalog's "Unknown" placeholder.
#[must_use]
pub fn day_type(code: &str, catalog: &Catalog) -> &'static str {
    let key = match DayType::from_code(code) {
        Some(DayType::Labour) => MessageKey::LabourDay,
        Some(DayType::Friday) => MessageKey::Friday,
        Some(DayType::Saturday) => MessageKey::Saturday,
        Some(DayType::Festive) => MessageKey::Festive,
        None => MessageKey::Unknown,
    };
    catalog.text(key)
}
