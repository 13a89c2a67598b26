// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::{faded, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card holding the ephemeris; `alpha` follows the card's fade.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(faded(
                colors.surface,
                opacity::SURFACE * alpha,
            ))),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Year badge pill.
pub fn badge(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(faded(colors.brand_primary, alpha))),
            text_color: Some(faded(iced::Color::WHITE, alpha)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Dimmed layer behind a modal alert.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).backdrop)),
        ..Default::default()
    }
}

/// The alert box itself.
pub fn dialog(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.error,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
