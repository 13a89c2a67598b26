// SPDX-License-Identifier: MPL-2.0
//! Payloads exchanged with the ephemeris backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A dated historical fact, as returned by `GET /api/ephemeris/today`.
///
/// Replaced wholesale on every load; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ephemeris {
    pub year: Year,
    pub text: String,
    /// Whether the backend can provide details for this entry.
    #[serde(default)]
    pub has_details: bool,
}

/// Year of an ephemeris. The backend sends a label such as `"Unknown"` when
/// the source has no year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i32),
    Label(String),
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Year::Number(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(year) => write!(f, "{year}"),
            Year::Label(label) => f.write_str(label),
        }
    }
}

/// Supplementary content for an ephemeris, fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EphemerisDetails {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    /// Absolute URL of a thumbnail image.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<Link>,
}

/// A related article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// Body of `POST /api/ephemeris/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsRequest<'a> {
    pub year: &'a Year,
    pub text: &'a str,
    pub lang: &'a str,
}

/// Response of the backend's `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// The backend sends `""` for a missing thumbnail; treat it like an absent field.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Link>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeris_without_has_details_defaults_to_false() {
        let eph: Ephemeris =
            serde_json::from_str(r#"{"year": 1492, "text": "Colom arriba a Amèrica"}"#).unwrap();
        assert_eq!(eph.year, Year::Number(1492));
        assert!(!eph.has_details);
    }

    #[test]
    fn ephemeris_ignores_unknown_fields() {
        let eph: Ephemeris = serde_json::from_str(
            r#"{"year": 1969, "text": "Arribada a la Lluna", "hasDetails": true, "pages": []}"#,
        )
        .unwrap();
        assert!(eph.has_details);
        assert_eq!(eph.text, "Arribada a la Lluna");
    }

    #[test]
    fn ephemeris_accepts_years_before_common_era() {
        let eph: Ephemeris = serde_json::from_str(r#"{"year": -44, "text": "Idus de març"}"#).unwrap();
        assert_eq!(eph.year, Year::Number(-44));
    }

    #[test]
    fn details_normalize_empty_strings_and_missing_links() {
        let details: EphemerisDetails =
            serde_json::from_str(r#"{"year": 1969, "text": "x", "description": "", "thumbnail": ""}"#)
                .unwrap();
        assert_eq!(details.description, None);
        assert_eq!(details.thumbnail, None);
        assert!(details.links.is_empty());
    }

    #[test]
    fn details_null_links_become_empty() {
        let details: EphemerisDetails = serde_json::from_str(r#"{"links": null}"#).unwrap();
        assert!(details.links.is_empty());
    }

    #[test]
    fn details_keep_link_order() {
        let details: EphemerisDetails = serde_json::from_str(
            r#"{
                "description": "Apollo 11",
                "thumbnail": "https://upload.example/apollo.jpg",
                "links": [
                    {"url": "https://ca.wikipedia.org/wiki/Apollo_11", "title": "Apollo 11"},
                    {"url": "https://ca.wikipedia.org/wiki/Lluna", "title": "Lluna"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(details.description.as_deref(), Some("Apollo 11"));
        let titles: Vec<&str> = details.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Apollo 11", "Lluna"]);
    }

    #[test]
    fn ephemeris_accepts_a_year_label() {
        let eph: Ephemeris =
            serde_json::from_str(r#"{"year": "Unknown", "text": "Fundació de Roma"}"#).unwrap();
        assert_eq!(eph.year, Year::Label("Unknown".into()));
        assert_eq!(eph.year.to_string(), "Unknown");
    }

    #[test]
    fn year_label_is_sent_back_as_a_string() {
        let year = Year::Label("Unknown".into());
        let body = DetailsRequest {
            year: &year,
            text: "Fundació de Roma",
            lang: "ca",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap()["year"],
            serde_json::json!("Unknown")
        );
    }

    #[test]
    fn details_request_serializes_lang_field() {
        let year = Year::Number(1969);
        let body = DetailsRequest {
            year: &year,
            text: "Arribada a la Lluna",
            lang: "ca",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"year": 1969, "text": "Arribada a la Lluna", "lang": "ca"})
        );
    }
}
