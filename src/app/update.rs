// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Handlers mutate the page through an [`UpdateContext`] and return the
//! follow-up `Task` (a backend request, or nothing). Responses come back as
//! messages tagged with the [`RequestId`] they were issued under; anything
//! that is no longer the outstanding request for its action is dropped.

use super::message::{LanguageLoad, Message};
use super::request::{RequestId, RequestKind, Requests};
use crate::animation::{self, Animator};
use crate::api::{ApiClient, ApiResult, Ephemeris, EphemerisDetails, HealthStatus};
use crate::i18n::{I18n, Language, TranslationBundle};
use crate::ui::alert::Alert;
use crate::ui::page::{ElementId, Page, ViewState};
use iced::widget::image;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub page: &'a mut Page,
    pub animator: &'a mut Animator,
    pub api: &'a ApiClient,
    pub requests: &'a mut Requests,
    pub current_ephemeris: &'a mut Option<Ephemeris>,
    pub details_expanded: &'a mut bool,
    pub alert: &'a mut Option<Alert>,
    pub thumbnail: &'a mut Option<image::Handle>,
}

impl UpdateContext<'_> {
    fn view_state(&self) -> Option<ViewState> {
        self.page.visible_state()
    }

    /// Next is usable only on content; details additionally needs an entry
    /// with details and no details request in flight.
    fn sync_controls(&mut self) {
        let content = self.view_state() == Some(ViewState::Content);
        let has_details = self
            .current_ephemeris
            .as_ref()
            .is_some_and(|eph| eph.has_details);
        let details_idle = !self.requests.is_pending(RequestKind::Details);

        self.page.set_disabled(ElementId::NextButton, !content);
        self.page.set_disabled(
            ElementId::DetailsButton,
            !(content && has_details && details_idle),
        );
    }

    fn set_details_label(&mut self, key: &'static str) {
        self.page
            .set_translated(ElementId::DetailsButtonLabel, key, self.i18n);
    }

    fn refresh_date(&mut self) {
        let date = self.i18n.format_current_date();
        self.page.set_text(ElementId::CurrentDate, date);
    }
}

/// Enters the loading state and requests today's ephemeris in the current
/// language, superseding any load still in flight.
pub fn load_new_ephemeris(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.page.show_state(ViewState::Loading);
    *ctx.details_expanded = false;
    ctx.page.set_hidden(ElementId::EphemerisDetails, true);
    ctx.set_details_label("actions.moreInfo");
    ctx.requests.cancel(RequestKind::Details);
    ctx.requests.cancel(RequestKind::Thumbnail);

    let request = ctx.requests.start(RequestKind::Ephemeris);
    ctx.sync_controls();

    let api = ctx.api.clone();
    let language = ctx.i18n.current_language();
    tracing::debug!(?request, language = language.code(), "loading ephemeris");
    Task::perform(
        async move { api.today_ephemeris(language).await },
        move |result| Message::EphemerisLoaded { request, result },
    )
}

pub fn handle_next(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.page.node(ElementId::NextButton).disabled {
        return Task::none();
    }
    load_new_ephemeris(ctx)
}

pub fn handle_retry(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.view_state() != Some(ViewState::Error) {
        return Task::none();
    }
    load_new_ephemeris(ctx)
}

pub fn handle_ephemeris_loaded(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    result: ApiResult<Ephemeris>,
) -> Task<Message> {
    if !ctx.requests.finish(RequestKind::Ephemeris, request) {
        tracing::debug!(?request, "dropping superseded ephemeris response");
        return Task::none();
    }

    match result {
        Ok(ephemeris) => {
            ctx.page
                .set_text(ElementId::YearBadge, ephemeris.year.to_string());
            ctx.page
                .set_text(ElementId::EphemerisText, ephemeris.text.as_str());
            *ctx.current_ephemeris = Some(ephemeris);
            ctx.page.show_state(ViewState::Content);
            ctx.animator.fade_in(
                ctx.page,
                ElementId::EphemerisContent,
                animation::CONTENT_FADE_IN,
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "error loading ephemeris");
            *ctx.current_ephemeris = None;
            ctx.page.show_state(ViewState::Error);
            ctx.animator.shake(ctx.page, ElementId::ErrorState);
        }
    }
    ctx.sync_controls();
    Task::none()
}

pub fn handle_details_toggled(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.view_state() != Some(ViewState::Content) {
        return Task::none();
    }

    if *ctx.details_expanded {
        ctx.animator
            .fade_out(ElementId::EphemerisDetails, animation::DETAILS_FADE_OUT);
        ctx.set_details_label("actions.moreInfo");
        *ctx.details_expanded = false;
        ctx.requests.cancel(RequestKind::Thumbnail);
        return Task::none();
    }

    if ctx.page.node(ElementId::DetailsButton).disabled {
        return Task::none();
    }
    let Some(ephemeris) = ctx.current_ephemeris.clone().filter(|eph| eph.has_details) else {
        return Task::none();
    };

    ctx.set_details_label("loading.details");
    let request = ctx.requests.start(RequestKind::Details);
    ctx.sync_controls();

    let api = ctx.api.clone();
    let language = ctx.i18n.current_language();
    Task::perform(
        async move {
            api.ephemeris_details(&ephemeris.year, &ephemeris.text, language)
                .await
        },
        move |result| Message::DetailsLoaded { request, result },
    )
}

pub fn handle_details_loaded(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    result: ApiResult<EphemerisDetails>,
) -> Task<Message> {
    if !ctx.requests.finish(RequestKind::Details, request) {
        tracing::debug!(?request, "dropping superseded details response");
        return Task::none();
    }

    let task = match result {
        Ok(details) => show_details(ctx, details),
        Err(err) => {
            tracing::warn!(error = %err, "error loading details");
            *ctx.alert = Some(Alert::new(ctx.i18n.t("error.loadingDetails")));
            ctx.set_details_label("actions.moreInfo");
            Task::none()
        }
    };
    ctx.sync_controls();
    task
}

fn show_details(ctx: &mut UpdateContext<'_>, details: EphemerisDetails) -> Task<Message> {
    let EphemerisDetails {
        description,
        thumbnail,
        links,
    } = details;

    ctx.page
        .set_hidden(ElementId::DetailsDescription, description.is_none());
    ctx.page.set_text(
        ElementId::DetailsDescription,
        description.unwrap_or_default(),
    );
    ctx.page
        .set_hidden(ElementId::DetailsLinksHeading, links.is_empty());
    ctx.page.set_links(ElementId::DetailsLinks, links);
    ctx.page.set_image(ElementId::DetailsThumbnail, thumbnail.clone());

    ctx.animator.fade_in(
        ctx.page,
        ElementId::EphemerisDetails,
        animation::DETAILS_FADE_IN,
    );
    ctx.set_details_label("actions.lessInfo");
    *ctx.details_expanded = true;

    *ctx.thumbnail = None;
    let Some(url) = thumbnail else {
        ctx.requests.cancel(RequestKind::Thumbnail);
        return Task::none();
    };
    let request = ctx.requests.start(RequestKind::Thumbnail);
    let api = ctx.api.clone();
    Task::perform(
        async move { api.fetch_thumbnail(&url).await },
        move |result| Message::ThumbnailLoaded { request, result },
    )
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    result: ApiResult<Vec<u8>>,
) -> Task<Message> {
    if !ctx.requests.finish(RequestKind::Thumbnail, request) {
        return Task::none();
    }
    match result {
        Ok(bytes) => *ctx.thumbnail = Some(image::Handle::from_bytes(bytes)),
        Err(err) => {
            tracing::warn!(error = %err, "error loading thumbnail");
            ctx.page.set_hidden(ElementId::DetailsThumbnail, true);
        }
    }
    Task::none()
}

/// Highlights `language` right away and requests its bundle.
pub fn handle_language_selected(ctx: &mut UpdateContext<'_>, language: Language) -> Task<Message> {
    ctx.page.set_active_language(language);
    request_translations(ctx, language, LanguageLoad::Switch)
}

pub fn request_translations(
    ctx: &mut UpdateContext<'_>,
    language: Language,
    origin: LanguageLoad,
) -> Task<Message> {
    let request = ctx.requests.start(RequestKind::Translations);
    Task::perform(I18n::fetch(ctx.api.clone(), language), move |result| {
        Message::TranslationsLoaded {
            request,
            language,
            origin,
            result,
        }
    })
}

pub fn handle_translations_loaded(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    language: Language,
    origin: LanguageLoad,
    result: ApiResult<TranslationBundle>,
) -> Task<Message> {
    let current = ctx.requests.finish(RequestKind::Translations, request);

    match origin {
        LanguageLoad::Startup => {
            if current {
                if !ctx.i18n.apply_loaded(ctx.page, language, result) {
                    ctx.page.set_active_language(ctx.i18n.current_language());
                }
            } else if result.is_ok() && ctx.i18n.bundle().is_empty() {
                // Nothing loaded yet; the highlight stays on the pending switch.
                tracing::debug!(?request, "applying startup translations behind a switch");
                ctx.i18n.apply_loaded(ctx.page, language, result);
            } else {
                tracing::debug!(?request, "startup translations superseded by a switch");
            }
            ctx.refresh_date();
            load_new_ephemeris(ctx)
        }
        LanguageLoad::Switch => {
            if !current {
                tracing::debug!(?request, "dropping superseded translations");
                return Task::none();
            }
            if ctx.i18n.apply_loaded(ctx.page, language, result) {
                ctx.refresh_date();
                load_new_ephemeris(ctx)
            } else {
                ctx.page.set_active_language(ctx.i18n.current_language());
                Task::none()
            }
        }
    }
}

pub fn handle_open_link(url: &str) -> Task<Message> {
    if let Err(err) = opener::open_browser(url) {
        tracing::warn!(%url, error = %err, "failed to open link");
    }
    Task::none()
}

pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.animator.tick(ctx.page, now);
    Task::none()
}

pub fn handle_health_checked(result: ApiResult<HealthStatus>) -> Task<Message> {
    match result {
        Ok(health) if health.is_ok() => {
            tracing::info!(timestamp = ?health.timestamp, "backend is healthy");
        }
        Ok(health) => tracing::warn!(status = %health.status, "backend reports a problem"),
        Err(err) => tracing::warn!(error = %err, "backend health check failed"),
    }
    Task::none()
}
