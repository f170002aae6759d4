//! Locale - Selects the message catalog and server-side API localization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported reply locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (fallback for every unrecognised tag)
    #[default]
    #[serde(rename = "EN")]
    En,
    /// Spanish
    #[serde(rename = "ES")]
    Es,
}

impl Locale {
    /// Map a locale tag such as `es`, `es_ES` or `en-GB` to a locale
    ///
    /// Only the Spanish primary subtag is recognised; anything else is English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default();

        if primary.eq_ignore_ascii_case("es") {
            Self::Es
        } else {
            Self::En
        }
    }

    /// Two-letter code sent to the API as `cultureInfo`
    #[must_use]
    pub const fn api_code(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_tag_maps_to_es() {
        assert_eq!(Locale::from_tag("es"), Locale::Es);
        assert_eq!(Locale::from_tag("ES"), Locale::Es);
        assert_eq!(Locale::from_tag("es_ES.UTF-8"), Locale::Es);
    }

    #[test]
    fn everything_else_maps_to_en() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("espanol"), Locale::En);
    }

    #[test]
    fn api_code_is_two_uppercase_letters() {
        assert_eq!(Locale::En.api_code(), "EN");
        assert_eq!(Locale::Es.api_code(), "ES");
        assert_eq!(Locale::Es.to_string(), "ES");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn serializes_as_api_code() {
        let json = serde_json::to_string(&Locale::Es).unwrap();
        assert_eq!(json, "\"ES\"");
    }
}
