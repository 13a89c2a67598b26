// SPDX-License-Identifier: MPL-2.0
//! Retained page model.
//!
//! The controller never reaches for widgets directly. Every element it needs
//! is bound once in [`Page::new`] under a fixed [`ElementId`], and the view
//! renders whatever state the nodes hold. Visibility, enablement, opacity and
//! text all live here, which keeps the controller testable without a window.

use crate::api::Link;
use crate::i18n::{I18n, Language};
use std::collections::BTreeMap;

/// Which of the three mutually exclusive panels is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error,
    Content,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Loading, ViewState::Error, ViewState::Content];

    /// The panel element toggled for this state.
    #[must_use]
    pub fn panel(self) -> ElementId {
        match self {
            ViewState::Loading => ElementId::LoadingState,
            ViewState::Error => ElementId::ErrorState,
            ViewState::Content => ElementId::EphemerisContent,
        }
    }
}

/// Fixed handles for every element the controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    AppTitle,
    AppSubtitle,
    CurrentDate,
    LanguageButton(Language),
    LoadingState,
    LoadingMessage,
    ErrorState,
    ErrorMessage,
    RetryButton,
    EphemerisContent,
    YearBadge,
    EphemerisText,
    EphemerisDetails,
    DetailsThumbnail,
    DetailsDescription,
    DetailsLinksHeading,
    DetailsLinks,
    NextButton,
    DetailsButton,
    DetailsButtonLabel,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Button,
    Panel,
    Image,
    LinkList,
    /// Receives its translation as a placeholder instead of text.
    Input,
}

/// State of one bound element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub hidden: bool,
    pub disabled: bool,
    pub active: bool,
    pub opacity: f32,
    /// Horizontal translation in logical pixels.
    pub offset_x: f32,
    pub shaking: bool,
    pub text: String,
    pub placeholder: String,
    pub i18n_key: Option<&'static str>,
    pub src: Option<String>,
    pub links: Vec<Link>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            hidden: false,
            disabled: false,
            active: false,
            opacity: 1.0,
            offset_x: 0.0,
            shaking: false,
            text: String::new(),
            placeholder: String::new(),
            i18n_key: None,
            src: None,
            links: Vec::new(),
        }
    }

    fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn translatable(kind: NodeKind, key: &'static str) -> Self {
        let mut node = Self::new(kind);
        node.i18n_key = Some(key);
        node.set_translation(key.to_string());
        node
    }

    fn set_translation(&mut self, value: String) {
        if self.kind == NodeKind::Input {
            self.placeholder = value;
        } else {
            self.text = value;
        }
    }
}

/// All bound elements plus the page language attribute.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: BTreeMap<ElementId, Node>,
    lang: String,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Binds every element in its initial state: loading panel shown, both
    /// action controls disabled, labels showing their translation keys.
    #[must_use]
    pub fn new() -> Self {
        use ElementId as E;
        use NodeKind as K;

        let mut nodes = BTreeMap::new();
        nodes.insert(E::AppTitle, Node::translatable(K::Text, "app.title"));
        nodes.insert(E::AppSubtitle, Node::translatable(K::Text, "app.subtitle"));
        nodes.insert(E::CurrentDate, Node::new(K::Text));
        for lang in Language::ALL {
            let mut button = Node::new(K::Button);
            button.text = lang.label().to_string();
            button.active = lang == Language::default();
            nodes.insert(E::LanguageButton(lang), button);
        }

        nodes.insert(E::LoadingState, Node::new(K::Panel));
        nodes.insert(
            E::LoadingMessage,
            Node::translatable(K::Text, "loading.ephemeris"),
        );
        nodes.insert(E::ErrorState, Node::new(K::Panel).hidden());
        nodes.insert(E::ErrorMessage, Node::translatable(K::Text, "error.loading"));
        nodes.insert(E::RetryButton, Node::translatable(K::Button, "actions.retry"));

        nodes.insert(E::EphemerisContent, Node::new(K::Panel).hidden());
        nodes.insert(E::YearBadge, Node::new(K::Text));
        nodes.insert(E::EphemerisText, Node::new(K::Text));
        nodes.insert(E::EphemerisDetails, Node::new(K::Panel).hidden());
        nodes.insert(E::DetailsThumbnail, Node::new(K::Image).hidden());
        nodes.insert(E::DetailsDescription, Node::new(K::Text));
        nodes.insert(
            E::DetailsLinksHeading,
            Node::translatable(K::Text, "details.links"),
        );
        nodes.insert(E::DetailsLinks, Node::new(K::LinkList));

        nodes.insert(
            E::NextButton,
            Node::translatable(K::Button, "actions.next").disabled(),
        );
        nodes.insert(E::DetailsButton, Node::new(K::Button).disabled());
        nodes.insert(
            E::DetailsButtonLabel,
            Node::translatable(K::Text, "actions.moreInfo"),
        );
        nodes.insert(E::Footer, Node::translatable(K::Text, "footer.source"));

        Self {
            nodes,
            lang: Language::default().code().to_string(),
        }
    }

    /// Returns the node bound to `id`.
    ///
    /// Every `ElementId` is bound in [`Page::new`] and nodes are never
    /// removed, so the lookup always succeeds.
    #[must_use]
    pub fn node(&self, id: ElementId) -> &Node {
        &self.nodes[&id]
    }

    pub fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.nodes.entry(id).or_insert_with(|| Node::new(NodeKind::Text))
    }

    /// Rebinds `id` as a translatable node of `kind`.
    pub fn bind_translatable(&mut self, id: ElementId, kind: NodeKind, key: &'static str) {
        self.nodes.insert(id, Node::translatable(kind, key));
    }

    /// Language attribute of the page.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, code: &str) {
        self.lang = code.to_string();
    }

    /// Shows the panel for `state` and hides the other two.
    pub fn show_state(&mut self, state: ViewState) {
        for candidate in ViewState::ALL {
            self.node_mut(candidate.panel()).hidden = candidate != state;
        }
    }

    /// The state whose panel is visible, if exactly one is.
    #[must_use]
    pub fn visible_state(&self) -> Option<ViewState> {
        let mut visible = ViewState::ALL
            .into_iter()
            .filter(|state| !self.node(state.panel()).hidden);
        match (visible.next(), visible.next()) {
            (Some(state), None) => Some(state),
            _ => None,
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.node_mut(id).text = text.into();
    }

    /// Retags `id` with `key` and writes its current translation.
    pub fn set_translated(&mut self, id: ElementId, key: &'static str, i18n: &I18n) {
        let node = self.node_mut(id);
        node.i18n_key = Some(key);
        node.set_translation(i18n.t(key));
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.node_mut(id).hidden = hidden;
    }

    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        self.node_mut(id).disabled = disabled;
    }

    pub fn set_active(&mut self, id: ElementId, active: bool) {
        self.node_mut(id).active = active;
    }

    /// Highlights the selector button for `language` only.
    pub fn set_active_language(&mut self, language: Language) {
        for lang in Language::ALL {
            self.set_active(ElementId::LanguageButton(lang), lang == language);
        }
    }

    /// The highlighted language, if any.
    #[must_use]
    pub fn active_language(&self) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| self.node(ElementId::LanguageButton(*lang)).active)
    }

    /// Sets an image source; an absent source hides the element.
    pub fn set_image(&mut self, id: ElementId, src: Option<String>) {
        let node = self.node_mut(id);
        node.hidden = src.is_none();
        node.src = src;
    }

    /// Replaces the links of a link list, keeping their order.
    pub fn set_links(&mut self, id: ElementId, links: Vec<Link>) {
        self.node_mut(id).links = links;
    }

    /// Rewrites every node that carries a translation key.
    pub fn apply_translations(&mut self, translate: impl Fn(&str) -> String) {
        for node in self.nodes.values_mut() {
            if let Some(key) = node.i18n_key {
                node.set_translation(translate(key));
            }
        }
    }
}
