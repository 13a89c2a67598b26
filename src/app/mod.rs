// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced update loop.
//!
//! `App` owns the page model and everything that mutates it. Startup fetches
//! the translation bundle for the resolved language, then renders the date and
//! loads today's ephemeris whether or not the bundle arrived.

pub mod config;
mod message;
pub mod paths;
pub mod request;
mod subscription;
mod update;
mod view;

pub use message::{Flags, LanguageLoad, Message};
pub use request::{RequestId, RequestKind};

use crate::animation::Animator;
use crate::api::{ApiClient, Ephemeris};
use crate::i18n::{self, I18n, Language};
use crate::ui::alert::Alert;
use crate::ui::page::{Page, ViewState};
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use request::Requests;
use std::fmt;

/// Window title used until a bundle provides `app.title`.
const APP_NAME: &str = "Ephemerides";

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Everything `App` needs at boot once flags and config are resolved.
#[derive(Debug, Clone)]
pub struct Startup {
    pub language: Language,
    pub api: ApiClient,
    pub theme_mode: ThemeMode,
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    page: Page,
    animator: Animator,
    api: ApiClient,
    theme_mode: ThemeMode,
    current_ephemeris: Option<Ephemeris>,
    details_expanded: bool,
    alert: Option<Alert>,
    thumbnail: Option<image::Handle>,
    requests: Requests,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.current_language())
            .field("view_state", &self.page.visible_state())
            .field("details_expanded", &self.details_expanded)
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Resolves config, language and backend from `flags`.
///
/// Fails only when neither the configured nor the default backend URL can be
/// used.
pub fn prepare(flags: &Flags) -> crate::error::Result<Startup> {
    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let language = i18n::resolve_language(
        flags.lang.as_deref(),
        config.general.language.as_deref(),
    );
    let base_url = config::resolve_api_url(flags.api_url.as_deref(), &config);
    let api = ApiClient::with_fallback(&base_url)?;
    tracing::info!(
        language = language.code(),
        api = %api.base_url(),
        "starting"
    );

    Ok(Startup {
        language,
        api,
        theme_mode: config.general.theme_mode,
    })
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    let boot = move || App::start(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state and the boot task: the translation bundle for
    /// `startup.language` plus a backend health probe.
    pub fn start(startup: Startup) -> (Self, Task<Message>) {
        let mut app = App {
            i18n: I18n::default(),
            page: Page::new(),
            animator: Animator::new(),
            api: startup.api,
            theme_mode: startup.theme_mode,
            current_ephemeris: None,
            details_expanded: false,
            alert: None,
            thumbnail: None,
            requests: Requests::new(),
        };
        app.page.set_active_language(startup.language);

        let translations = {
            let mut ctx = app.context();
            update::request_translations(&mut ctx, startup.language, LanguageLoad::Startup)
        };
        let api = app.api.clone();
        let health = Task::perform(async move { api.health().await }, Message::HealthChecked);

        (app, Task::batch([translations, health]))
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            page: &mut self.page,
            animator: &mut self.animator,
            api: &self.api,
            requests: &mut self.requests,
            current_ephemeris: &mut self.current_ephemeris,
            details_expanded: &mut self.details_expanded,
            alert: &mut self.alert,
            thumbnail: &mut self.thumbnail,
        }
    }

    fn title(&self) -> String {
        self.i18n.lookup("app.title").unwrap_or(APP_NAME).to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::frames(self.animator.is_animating())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // The alert is modal: only its dismissal and background results get through.
        if self.alert.is_some()
            && matches!(
                message,
                Message::NextClicked
                    | Message::RetryClicked
                    | Message::DetailsToggled
                    | Message::LanguageSelected(_)
                    | Message::OpenLink(_)
            )
        {
            return Task::none();
        }

        let mut ctx = self.context();
        match message {
            Message::NextClicked => update::handle_next(&mut ctx),
            Message::RetryClicked => update::handle_retry(&mut ctx),
            Message::DetailsToggled => update::handle_details_toggled(&mut ctx),
            Message::LanguageSelected(language) => {
                update::handle_language_selected(&mut ctx, language)
            }
            Message::TranslationsLoaded {
                request,
                language,
                origin,
                result,
            } => update::handle_translations_loaded(&mut ctx, request, language, origin, result),
            Message::EphemerisLoaded { request, result } => {
                update::handle_ephemeris_loaded(&mut ctx, request, result)
            }
            Message::DetailsLoaded { request, result } => {
                update::handle_details_loaded(&mut ctx, request, result)
            }
            Message::ThumbnailLoaded { request, result } => {
                update::handle_thumbnail_loaded(&mut ctx, request, result)
            }
            Message::OpenLink(url) => update::handle_open_link(&url),
            Message::AlertDismissed => {
                *ctx.alert = None;
                Task::none()
            }
            Message::Frame(now) => update::handle_frame(&mut ctx, now),
            Message::HealthChecked(result) => update::handle_health_checked(result),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            thumbnail: self.thumbnail.as_ref(),
            alert: self.alert.as_ref(),
        })
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn view_state(&self) -> Option<ViewState> {
        self.page.visible_state()
    }

    #[must_use]
    pub fn current_ephemeris(&self) -> Option<&Ephemeris> {
        self.current_ephemeris.as_ref()
    }

    #[must_use]
    pub fn details_expanded(&self) -> bool {
        self.details_expanded
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The outstanding request for `kind`, if any.
    #[must_use]
    pub fn pending_request(&self, kind: RequestKind) -> Option<RequestId> {
        self.requests.pending(kind)
    }
}
