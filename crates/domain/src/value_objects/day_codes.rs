//! Day-of-week and day-type codes used by the calendar and schedule APIs
//!
//! Codes are the initials of the Spanish names, which is why Wednesday
//! (miércoles) is `X` rather than a second `M`.

use serde::{Deserialize, Serialize};

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Parse an API day code (`L`, `M`, `X`, `J`, `V`, `S`, `D`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "L" => Some(Self::Monday),
            "M" => Some(Self::Tuesday),
            "X" => Some(Self::Wednesday),
            "J" => Some(Self::Thursday),
            "V" => Some(Self::Friday),
            "S" => Some(Self::Saturday),
            "D" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// API code for this day
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Monday => "L",
            Self::Tuesday => "M",
            Self::Wednesday => "X",
            Self::Thursday => "J",
            Self::Friday => "V",
            Self::Saturday => "S",
            Self::Sunday => "D",
        }
    }
}

/// Service day type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Working day (laborable)
    Labour,
    Friday,
    Saturday,
    /// Sundays and public holidays
    Festive,
}

impl DayType {
    /// Parse an API day-type code (`LA`, `V`, `SA`, `FE`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "LA" => Some(Self::Labour),
            "V" => Some(Self::Friday),
            "SA" => Some(Self::Saturday),
            "FE" => Some(Self::Festive),
            _ => None,
        }
    }

    /// API code for this day type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Labour => "LA",
            Self::Friday => "V",
            Self::Saturday => "SA",
            Self::Festive => "FE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_is_wednesday() {
        assert_eq!(DayOfWeek::from_code("X"), Some(DayOfWeek::Wednesday));
    }

    #[test]
    fn d_is_sunday() {
        assert_eq!(DayOfWeek::from_code("D"), Some(DayOfWeek::Sunday));
    }

    #[test]
    fn day_codes_roundtrip() {
        for code in ["L", "M", "X", "J", "V", "S", "D"] {
            let day = DayOfWeek::from_code(code).unwrap();
            assert_eq!(day.code(), code);
        }
    }

    #[test]
    fn unknown_day_code_is_none() {
        assert_eq!(DayOfWeek::from_code("W"), None);
        assert_eq!(DayOfWeek::from_code(""), None);
        assert_eq!(DayOfWeek::from_code("l"), None);
    }

    #[test]
    fn day_type_codes_roundtrip() {
        for code in ["LA", "V", "SA", "FE"] {
            let day_type = DayType::from_code(code).unwrap();
            assert_eq!(day_type.code(), code);
        }
    }

    #[test]
    fn unknown_day_type_is_none() {
        assert_eq!(DayType::from_code("DO"), None);
        assert_eq!(DayType::from_code("L"), None);
    }
}
