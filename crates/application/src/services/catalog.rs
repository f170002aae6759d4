//! Message catalog
//!
//! Compiled-in label tables for each [`Locale`]. A catalog is a plain value
//! handed to the formatter for one request, so two requests in different
//! languages never share state.

use domain::Locale;

/// Translatable labels used in replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    IncorrectValues,
    Unknown,
    Line,
    Lines,
    DistanceFromOrigin,
    DistanceFromPreviousStop,
    FirstServiceA,
    LastServiceA,
    FirstServiceB,
    LastServiceB,
    TimeLeft,
    BusDistance,
    Incidents,
    Direction1,
    Direction2,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    LabourDay,
    Festive,
}

/// Label lookup for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    /// Catalog for `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The catalog's locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized text for `key`
    #[must_use]
    pub const fn text(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::En => english(key),
            Locale::Es => spanish(key),
        }
    }
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::IncorrectValues => "Incorrect values",
        MessageKey::Unknown => "Unknown",
        MessageKey::Line => "Line",
        MessageKey::Lines => "Lines",
        MessageKey::DistanceFromOrigin => "Distance from origin",
        MessageKey::DistanceFromPreviousStop => "Distance from previous stop",
        MessageKey::FirstServiceA => "First service (A)",
        MessageKey::LastServiceA => "Last service (A)",
        MessageKey::FirstServiceB => "First service (B)",
        MessageKey::LastServiceB => "Last service (B)",
        MessageKey::TimeLeft => "Time left",
        MessageKey::BusDistance => "Bus distance",
        MessageKey::Incidents => "Incidents",
        MessageKey::Direction1 => "Direction 1",
        MessageKey::Direction2 => "Direction 2",
        MessageKey::Monday => "Monday",
        MessageKey::Tuesday => "Tuesday",
        MessageKey::Wednesday => "Wednesday",
        MessageKey::Thursday => "Thursday",
        MessageKey::Friday => "Friday",
        MessageKey::Saturday => "Saturday",
        MessageKey::Sunday => "Sunday",
        MessageKey::LabourDay => "Labour day",
        MessageKey::Festive => "Festive",
    }
}

const fn spanish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::IncorrectValues => "Valores incorrectos",
        MessageKey::Unknown => "Desconocido",
        MessageKey::Line => "Línea",
        MessageKey::Lines => "Líneas",
        MessageKey::DistanceFromOrigin => "Distancia desde el origen",
        MessageKey::DistanceFromPreviousStop => "Distancia desde la parada anterior",
        MessageKey::FirstServiceA => "Primer servicio (A)",
        MessageKey::LastServiceA => "Último servicio (A)",
        MessageKey::FirstServiceB => "Primer servicio (B)",
        MessageKey::LastServiceB => "Último servicio (B)",
        MessageKey::TimeLeft => "Tiempo restante",
        MessageKey::BusDistance => "Distancia del autobús",
        MessageKey::Incidents => "Incidencias",
        MessageKey::Direction1 => "Dirección 1",
        MessageKey::Direction2 => "Dirección 2",
        MessageKey::Monday => "Lunes",
        MessageKey::Tuesday => "Martes",
        MessageKey::Wednesday => "Miércoles",
        MessageKey::Thursday => "Jueves",
        MessageKey::Friday => "Viernes",
        MessageKey::Saturday => "Sábado",
        MessageKey::Sunday => "Domingo",
        MessageKey::LabourDay => "Laborable",
        MessageKey::Festive => "Festivo",
    }
}
