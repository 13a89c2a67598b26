// SPDX-License-Identifier: MPL-2.0
//! Internationalization support.
//!
//! Translation bundles are served by the backend as nested JSON objects, one
//! per display language. [`I18n`] keeps the current language and its bundle,
//! resolves dotted keys and rewrites the translatable nodes of a [`Page`].
//!
//! Lookups never fail: a key that the bundle cannot resolve is returned
//! unchanged, so a missing translation shows up as its key instead of an
//! empty label.

pub mod bundle;
pub mod date;
pub mod language;

pub use bundle::TranslationBundle;
pub use language::Language;

use crate::api::{ApiClient, ApiResult};
use crate::ui::page::Page;

/// Current display language and its translations.
///
/// Starts in Catalan with an empty bundle, so [`I18n::t`] echoes keys until
/// a bundle is applied.
#[derive(Debug, Clone, Default)]
pub struct I18n {
    current: Language,
    bundle: TranslationBundle,
}

impl I18n {
    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    #[must_use]
    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }

    /// Resolves `key`, or `None` if the bundle has no usable string for it.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.bundle.lookup(key)
    }

    /// Resolves `key`, falling back to the key itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Fetches the bundle for `language` without touching any state.
    ///
    /// Owns its client so the future can be handed to an `iced::Task`.
    pub async fn fetch(api: ApiClient, language: Language) -> ApiResult<TranslationBundle> {
        api.translations(language).await
    }

    /// Applies the outcome of a bundle fetch.
    ///
    /// On success the bundle and language are replaced together and the page
    /// is rewritten. On failure nothing changes. Returns whether the switch
    /// took effect.
    pub fn apply_loaded(
        &mut self,
        page: &mut Page,
        language: Language,
        result: ApiResult<TranslationBundle>,
    ) -> bool {
        match result {
            Ok(bundle) => {
                self.bundle = bundle;
                self.current = language;
                self.update_page(page);
                tracing::info!(language = language.code(), "language loaded");
                true
            }
            Err(err) => {
                tracing::warn!(
                    language = language.code(),
                    error = %err,
                    "error loading language"
                );
                false
            }
        }
    }

    /// Fetches and applies the bundle for `language` in one step.
    pub async fn load_language(
        &mut self,
        api: &ApiClient,
        page: &mut Page,
        language: Language,
    ) -> bool {
        let result = api.translations(language).await;
        self.apply_loaded(page, language, result)
    }

    /// Rewrites every translatable node and the page language attribute.
    pub fn update_page(&self, page: &mut Page) {
        page.apply_translations(|key| self.t(key));
        page.set_lang(self.current.code());
    }

    /// Today's date in long form, in the current language.
    #[must_use]
    pub fn format_current_date(&self) -> String {
        date::format_date(&chrono::Local::now(), self.current)
    }
}

/// Picks the startup language: CLI, then config, then Catalan.
///
/// Values that do not name a supported language are skipped.
#[must_use]
pub fn resolve_language(cli: Option<&str>, config: Option<&str>) -> Language {
    [("command line", cli), ("config", config)]
        .into_iter()
        .filter_map(|(source, tag)| tag.map(|tag| (source, tag)))
        .find_map(|(source, tag)| match Language::parse(tag) {
            Ok(lang) => Some(lang),
            Err(err) => {
                tracing::warn!(source, "ignoring language: {err}");
                None
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::ui::page::{ElementId, NodeKind};
    use mockito::Server;
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> TranslationBundle {
        TranslationBundle::try_from(value).unwrap()
    }

    fn catalan() -> TranslationBundle {
        bundle(json!({
            "app": {"title": "Efemèrides"},
            "actions": {"next": "Següent", "moreInfo": "Més informació"}
        }))
    }

    #[test]
    fn t_returns_value_or_key_for_every_language() {
        for lang in Language::ALL {
            let mut i18n = I18n::default();
            let mut page = Page::new();
            assert!(i18n.apply_loaded(&mut page, lang, Ok(catalan())));
            assert_eq!(i18n.t("actions.next"), "Següent");
            assert_eq!(i18n.t("actions.unknown"), "actions.unknown");
            assert_eq!(i18n.t("nope"), "nope");
        }
    }

    #[test]
    fn empty_bundle_echoes_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_language(), Language::Catalan);
        assert_eq!(i18n.t("app.title"), "app.title");
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut i18n = I18n::default();
        let mut page = Page::new();
        i18n.apply_loaded(&mut page, Language::Catalan, Ok(catalan()));
        let before = i18n.bundle().clone();

        let applied = i18n.apply_loaded(
            &mut page,
            Language::English,
            Err(ApiError::Network("connection refused".into())),
        );

        assert!(!applied);
        assert_eq!(i18n.current_language(), Language::Catalan);
        assert_eq!(i18n.bundle(), &before);
        assert_eq!(page.lang(), "ca");
    }

    #[test]
    fn successful_load_replaces_bundle_wholesale() {
        let mut i18n = I18n::default();
        let mut page = Page::new();
        i18n.apply_loaded(&mut page, Language::Catalan, Ok(catalan()));
        i18n.apply_loaded(
            &mut page,
            Language::English,
            Ok(bundle(json!({"actions": {"next": "Next"}}))),
        );

        assert_eq!(i18n.current_language(), Language::English);
        assert_eq!(i18n.t("actions.next"), "Next");
        // No partial merge with the previous bundle.
        assert_eq!(i18n.t("app.title"), "app.title");
    }

    #[test]
    fn update_page_rewrites_text_and_placeholders() {
        let mut page = Page::new();
        page.bind_translatable(ElementId::AppSubtitle, NodeKind::Input, "search.placeholder");
        let mut i18n = I18n::default();
        i18n.apply_loaded(
            &mut page,
            Language::Spanish,
            Ok(bundle(json!({
                "app": {"title": "Efemérides"},
                "search": {"placeholder": "Buscar"}
            }))),
        );

        assert_eq!(page.node(ElementId::AppTitle).text, "Efemérides");
        let search = page.node(ElementId::AppSubtitle);
        assert_eq!(search.placeholder, "Buscar");
        assert!(search.text.is_empty());
        assert_eq!(page.lang(), "es");
        // Unresolved keys are rendered as the key.
        assert_eq!(page.node(ElementId::NextButton).text, "actions.next");
    }

    #[test]
    fn resolve_language_prefers_cli_then_config() {
        assert_eq!(resolve_language(Some("en"), Some("es")), Language::English);
        assert_eq!(resolve_language(None, Some("es")), Language::Spanish);
        assert_eq!(resolve_language(Some("fr"), Some("es")), Language::Spanish);
        assert_eq!(resolve_language(Some("xx"), Some("yy")), Language::Catalan);
        assert_eq!(resolve_language(None, None), Language::Catalan);
    }

    #[tokio::test]
    async fn load_language_applies_fetched_bundle() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/translations/es")
            .with_status(200)
            .with_body(r#"{"actions": {"next": "Siguiente"}}"#)
            .create_async()
            .await;
        let api = ApiClient::new(&server.url()).unwrap();
        let mut i18n = I18n::default();
        let mut page = Page::new();

        assert!(i18n.load_language(&api, &mut page, Language::Spanish).await);
        assert_eq!(i18n.current_language(), Language::Spanish);
        assert_eq!(page.node(ElementId::NextButton).text, "Siguiente");
    }

    #[tokio::test]
    async fn load_language_failure_leaves_state_untouched() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/translations/en")
            .with_status(500)
            .with_body(r#"{"error": "boom"}"#)
            .create_async()
            .await;
        let api = ApiClient::new(&server.url()).unwrap();
        let mut i18n = I18n::default();
        let mut page = Page::new();
        i18n.apply_loaded(&mut page, Language::Catalan, Ok(catalan()));

        assert!(!i18n.load_language(&api, &mut page, Language::English).await);
        assert_eq!(i18n.current_language(), Language::Catalan);
        assert_eq!(i18n.t("actions.next"), "Següent");
        assert_eq!(page.node(ElementId::NextButton).text, "Següent");
    }
}
