// SPDX-License-Identifier: MPL-2.0
//! Long-form localized dates for the header.

use super::Language;
use chrono::{DateTime, Locale, TimeZone};
use std::fmt::Display;

/// Formats `moment` as weekday, day, month and year in `language`.
pub fn format_date<Tz>(moment: &DateTime<Tz>, language: Language) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (pattern, locale) = match language {
        // Catalan month names carry their own preposition ("de gener", "d'abril").
        Language::Catalan => ("%A, %-d %B de %Y", Locale::ca_ES),
        Language::Spanish => ("%A, %-d de %B de %Y", Locale::es_ES),
        Language::English => ("%A, %B %-d, %Y", Locale::en_US),
    };
    moment.format_localized(pattern, locale).to_string()
}
