// SPDX-License-Identifier: MPL-2.0
//! Renders the page model.
//!
//! Nothing here decides state: visibility, enablement, text and opacity are
//! read from [`Page`] nodes as the update handlers left them.

use super::Message;
use crate::animation::SHAKE_DISTANCE;
use crate::i18n::{I18n, Language};
use crate::ui::alert::Alert;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::page::{ElementId, Page, ViewState};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::{faded, ColorScheme};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, image, row, scrollable, text, Column, Row, Space, Text};
use iced::{Element, Length, Padding, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub thumbnail: Option<&'a image::Handle>,
    pub alert: Option<&'a Alert>,
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Primary,
    Secondary,
    Brand,
    Error,
}

fn styled_text(content: &str, size: f32, tone: Tone, alpha: f32) -> Text<'_> {
    text(content).size(size).style(move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let color = match tone {
            Tone::Primary => colors.text_primary,
            Tone::Secondary => colors.text_secondary,
            Tone::Brand => colors.brand_primary,
            Tone::Error => colors.error,
        };
        text::Style {
            color: Some(faded(color, alpha)),
        }
    })
}

/// Renders the whole window, with the alert layered on top when one is raised.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = ctx.page;
    let body = match page.visible_state() {
        Some(ViewState::Content) => view_content(page, ctx.thumbnail),
        Some(ViewState::Error) => view_error(page),
        Some(ViewState::Loading) | None => view_loading(page),
    };

    let layout = column![view_header(page), body, view_footer(page)]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    let base = container(scrollable(container(layout).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.alert {
        Some(alert) => alert.overlay(base, ctx.i18n.t("actions.ok"), Message::AlertDismissed),
        None => base.into(),
    }
}

fn view_header(page: &Page) -> Element<'_, Message> {
    let languages = Language::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |languages, lang| {
            let node = page.node(ElementId::LanguageButton(lang));
            languages.push(
                button(
                    text(node.text.as_str())
                        .size(typography::CAPTION)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fixed(sizing::LANGUAGE_BUTTON_WIDTH))
                .on_press(Message::LanguageSelected(lang))
                .style(button_styles::language(node.active)),
            )
        });

    column![
        styled_text(
            &page.node(ElementId::AppTitle).text,
            typography::TITLE_LG,
            Tone::Brand,
            1.0
        ),
        styled_text(
            &page.node(ElementId::AppSubtitle).text,
            typography::BODY,
            Tone::Secondary,
            1.0
        ),
        row![
            styled_text(
                &page.node(ElementId::CurrentDate).text,
                typography::CAPTION,
                Tone::Secondary,
                1.0
            ),
            Space::new().width(Length::Fill),
            languages,
        ]
        .align_y(Vertical::Center),
    ]
    .spacing(spacing::XS)
    .into()
}

fn view_loading(page: &Page) -> Element<'_, Message> {
    container(styled_text(
        &page.node(ElementId::LoadingMessage).text,
        typography::BODY_LG,
        Tone::Secondary,
        1.0,
    ))
    .center_x(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn view_error(page: &Page) -> Element<'_, Message> {
    let retry = page.node(ElementId::RetryButton);
    let panel = column![
        styled_text(
            &page.node(ElementId::ErrorMessage).text,
            typography::BODY_LG,
            Tone::Error,
            1.0
        ),
        button(text(retry.text.as_str()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press_maybe((!retry.disabled).then_some(Message::RetryClicked))
            .style(button_styles::primary),
    ]
    .spacing(spacing::MD)
    .align_x(Horizontal::Center);

    // Shake is drawn by trading padding between the two sides.
    let offset = page
        .node(ElementId::ErrorState)
        .offset_x
        .clamp(-SHAKE_DISTANCE, SHAKE_DISTANCE);
    container(panel)
        .center_x(Length::Fill)
        .padding(Padding {
            top: spacing::XL,
            right: SHAKE_DISTANCE - offset,
            bottom: spacing::XL,
            left: SHAKE_DISTANCE + offset,
        })
        .into()
}

fn view_content<'a>(page: &'a Page, thumbnail: Option<&'a image::Handle>) -> Element<'a, Message> {
    let alpha = page.node(ElementId::EphemerisContent).opacity;

    let badge = container(
        text(page.node(ElementId::YearBadge).text.as_str()).size(typography::TITLE_MD),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(container_styles::badge(alpha));

    let mut card = Column::new()
        .spacing(spacing::MD)
        .push(badge)
        .push(styled_text(
            &page.node(ElementId::EphemerisText).text,
            typography::BODY_LG,
            Tone::Primary,
            alpha,
        ));

    if !page.node(ElementId::EphemerisDetails).hidden {
        card = card.push(view_details(page, thumbnail, alpha));
    }

    let next = page.node(ElementId::NextButton);
    let details = page.node(ElementId::DetailsButton);
    let actions = row![
        button(text(next.text.as_str()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press_maybe((!next.disabled).then_some(Message::NextClicked))
            .style(button_styles::primary),
        button(
            text(page.node(ElementId::DetailsButtonLabel).text.as_str()).size(typography::BODY)
        )
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe((!details.disabled).then_some(Message::DetailsToggled))
        .style(button_styles::primary),
    ]
    .spacing(spacing::SM);

    container(card.push(actions))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::card(alpha))
        .into()
}

fn view_details<'a>(
    page: &'a Page,
    thumbnail: Option<&'a image::Handle>,
    parent_alpha: f32,
) -> Element<'a, Message> {
    let alpha = parent_alpha * page.node(ElementId::EphemerisDetails).opacity;
    let mut details = Column::new().spacing(spacing::SM);

    if let Some(handle) = thumbnail.filter(|_| !page.node(ElementId::DetailsThumbnail).hidden) {
        details = details.push(
            image(handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .opacity(alpha),
        );
    }

    let description = page.node(ElementId::DetailsDescription);
    if !description.hidden {
        details = details.push(styled_text(
            &description.text,
            typography::BODY,
            Tone::Primary,
            alpha,
        ));
    }

    let heading = page.node(ElementId::DetailsLinksHeading);
    if !heading.hidden {
        details = details.push(styled_text(
            &heading.text,
            typography::CAPTION,
            Tone::Secondary,
            alpha,
        ));
    }

    let links = page
        .node(ElementId::DetailsLinks)
        .links
        .iter()
        .map(|link| {
            let title = if link.title.is_empty() {
                link.url.as_str()
            } else {
                link.title.as_str()
            };
            button(text(format!("→ {title}")).size(typography::BODY))
                .padding(0)
                .on_press(Message::OpenLink(link.url.clone()))
                .style(button_styles::link)
                .into()
        });

    details
        .push(Column::with_children(links).spacing(spacing::XXS))
        .into()
}

fn view_footer(page: &Page) -> Element<'_, Message> {
    container(styled_text(
        &page.node(ElementId::Footer).text,
        typography::CAPTION,
        Tone::Secondary,
        1.0,
    ))
    .center_x(Length::Fill)
    .into()
}
