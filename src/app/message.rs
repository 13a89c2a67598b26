// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::request::RequestId;
use crate::api::{ApiResult, Ephemeris, EphemerisDetails, HealthStatus};
use crate::i18n::{Language, TranslationBundle};
use std::time::Instant;

/// Why a translation bundle was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageLoad {
    /// First load at boot; the ephemeris load follows whatever the outcome.
    Startup,
    /// User picked a language; an ephemeris load follows only on success.
    Switch,
}

/// Messages consumed by `App::update`.
///
/// Every network result carries the [`RequestId`] it was issued with so stale
/// responses can be told apart from the one the UI is waiting for.
#[derive(Debug, Clone)]
pub enum Message {
    NextClicked,
    RetryClicked,
    DetailsToggled,
    LanguageSelected(Language),
    TranslationsLoaded {
        request: RequestId,
        language: Language,
        origin: LanguageLoad,
        result: ApiResult<TranslationBundle>,
    },
    EphemerisLoaded {
        request: RequestId,
        result: ApiResult<Ephemeris>,
    },
    DetailsLoaded {
        request: RequestId,
        result: ApiResult<EphemerisDetails>,
    },
    ThumbnailLoaded {
        request: RequestId,
        result: ApiResult<Vec<u8>>,
    },
    /// A related-article link was clicked.
    OpenLink(String),
    AlertDismissed,
    /// Animation frame while an effect is running.
    Frame(Instant),
    HealthChecked(ApiResult<HealthStatus>),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Display language override in BCP-47 form (e.g. `es`, `ca-ES`).
    pub lang: Option<String>,
    /// Backend base URL override.
    /// Takes precedence over the `EPHEMERIDES_API_URL` environment variable.
    pub api_url: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over the `EPHEMERIDES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
