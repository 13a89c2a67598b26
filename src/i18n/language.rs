// SPDX-License-Identifier: MPL-2.0
//! Supported display languages.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A display language the backend serves translations and ephemerides for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    Catalan,
    Spanish,
    English,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 3] = [Language::Catalan, Language::Spanish, Language::English];

    /// ISO 639-1 code sent to the backend.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Catalan => "ca",
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Short label shown on the language selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::Catalan => "CA",
            Language::Spanish => "ES",
            Language::English => "EN",
        }
    }

    /// Parses a BCP-47 tag. Region and script subtags are ignored, so
    /// `ca-ES` and `en-US` resolve to their base language.
    pub fn parse(tag: &str) -> Result<Self> {
        let id: LanguageIdentifier = tag
            .trim()
            .parse()
            .map_err(|_| Error::UnsupportedLanguage(tag.to_string()))?;

        Language::ALL
            .into_iter()
            .find(|lang| id.language.as_str() == lang.code())
            .ok_or_else(|| Error::UnsupportedLanguage(tag.to_string()))
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
